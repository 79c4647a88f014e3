//! Integration tests for npm-dep-graph using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use npm_dep_graph::graph::{DependencyGraphBuilder, GraphRenderer};
use npm_dep_graph::provider::{NodePackageProvider, ProviderOptions};
use npm_dep_graph::reports::{JsonReportGenerator, ReportGenerator};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn write_package(dir: &Path, manifest: serde_json::Value) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("package.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

/// A small web app with a hoisted install and one nested copy:
///
/// ```text
/// web-app
/// ├── express ── debug@4 (nested), cookie
/// ├── lodash
/// └── (dev) test-runner ── (dev, missing) fixtures, (optional) fsevents
/// ```
fn create_web_app(temp_dir: &TempDir) -> PathBuf {
    let root = temp_dir.path().canonicalize().unwrap();

    write_package(
        &root,
        json!({
            "name": "web-app",
            "version": "0.3.0",
            "dependencies": {"express": "^4.18.0", "lodash": "^4.17.0"},
            "devDependencies": {"test-runner": "^1.0.0"},
            "optionalDependencies": {"not-installed": "*"}
        }),
    );

    let modules = root.join("node_modules");
    write_package(
        &modules.join("express"),
        json!({
            "name": "express",
            "version": "4.18.2",
            "dependencies": {"debug": "4.3.4", "cookie": "0.5.0"}
        }),
    );
    write_package(
        &modules.join("express/node_modules/debug"),
        json!({"name": "debug", "version": "4.3.4"}),
    );
    write_package(
        &modules.join("debug"),
        json!({"name": "debug", "version": "2.6.9"}),
    );
    write_package(
        &modules.join("cookie"),
        json!({"name": "cookie", "version": "0.5.0"}),
    );
    write_package(
        &modules.join("lodash"),
        json!({"name": "lodash", "version": "4.17.21"}),
    );
    write_package(
        &modules.join("test-runner"),
        json!({
            "name": "test-runner",
            "version": "1.4.0",
            "devDependencies": {"fixtures": "*"},
            "optionalDependencies": {"fsevents": "^2.3.0"}
        }),
    );
    write_package(
        &modules.join("fsevents"),
        json!({"name": "fsevents", "version": "2.3.3"}),
    );

    root
}

fn walk(cwd: &Path) -> DependencyGraphBuilder {
    let provider =
        NodePackageProvider::new(ProviderOptions::builder().with_cwd(cwd).build().unwrap());
    let mut builder = DependencyGraphBuilder::new();
    builder.build(&provider, None).unwrap();
    builder
}

#[test]
fn test_walk_installed_web_app() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_web_app(&temp_dir);

    let builder = walk(&root);

    // web-app, express, nested debug, cookie, lodash, test-runner, fsevents
    assert_eq!(builder.package_count(), 7);

    let paths: Vec<_> = builder
        .graph()
        .node_weights()
        .map(|node| node.path.clone())
        .collect();
    assert!(paths.contains(&root.join("node_modules/express/node_modules/debug")));
    assert!(!paths.contains(&root.join("node_modules/debug")));
}

#[test]
fn test_ascii_tree_of_web_app() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_web_app(&temp_dir);
    let builder = walk(&root);

    let mut output = Vec::new();
    GraphRenderer::new(false)
        .render_ascii(builder.graph(), builder.root(), &mut output)
        .unwrap();
    let tree = String::from_utf8(output).unwrap();

    assert_eq!(
        tree,
        "web-app@0.3.0\n\
         ├── express@4.18.2\n\
         │   ├── debug@4.3.4\n\
         │   └── cookie@0.5.0\n\
         ├── lodash@4.17.21\n\
         └── test-runner@1.4.0 [dev]\n\
        \u{20}   └── fsevents@2.3.3 [optional]\n"
    );
}

#[test]
fn test_lineup_report_of_web_app() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_web_app(&temp_dir);
    let builder = walk(&root);

    let report = JsonReportGenerator::new().generate_report(&builder).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    let names: Vec<_> = json["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "cookie",
            "debug",
            "express",
            "fsevents",
            "lodash",
            "test-runner",
            "web-app"
        ]
    );

    let fsevents = &json["packages"][3];
    assert_eq!(fsevents["optional"], true);
    assert!(
        predicate::str::ends_with("node_modules/fsevents")
            .eval(fsevents["path"].as_str().unwrap())
    );
}

#[test]
fn test_walk_from_nested_source_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_web_app(&temp_dir);
    let nested = root.join("src/routes");
    fs::create_dir_all(&nested).unwrap();

    let builder = walk(&nested);
    let root_idx = builder.root().unwrap();

    assert_eq!(builder.graph()[root_idx].path, root);
    assert_eq!(builder.package_count(), 7);
}

#[test]
fn test_walk_fails_when_production_dependency_missing() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_web_app(&temp_dir);
    fs::remove_dir_all(root.join("node_modules/cookie")).unwrap();

    let provider =
        NodePackageProvider::new(ProviderOptions::builder().with_cwd(&root).build().unwrap());
    let err = DependencyGraphBuilder::new()
        .build(&provider, None)
        .unwrap_err();

    assert!(err.chain().any(|cause| {
        predicate::str::contains("Unable to locate module cookie").eval(&cause.to_string())
    }));
}

#[test]
fn test_ascii_tree_of_nameless_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    write_package(&root, json!({"private": true, "dependencies": {"left-pad": "*"}}));
    write_package(
        &root.join("node_modules/left-pad"),
        json!({"name": "left-pad", "version": "1.3.0"}),
    );

    let builder = walk(&root);
    let mut output = Vec::new();
    GraphRenderer::new(false)
        .render_ascii(builder.graph(), builder.root(), &mut output)
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "(unnamed)\n\
         └── left-pad@1.3.0\n"
    );
}
