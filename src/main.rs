use miette::Result;

/// Main entry point for the npm-dep-graph CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    npm_dep_graph::run()
}
