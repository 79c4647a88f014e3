//! Diagnostic logging setup for the binary
//!
//! The library only emits `tracing` events; this installs the subscriber
//! that prints them.

use tracing_subscriber::EnvFilter;

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};

/// Filter directive used when `RUST_LOG` is not set
pub fn filter_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install a stderr subscriber; a subscriber already set by the host wins
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for() {
        assert_eq!(filter_for(false), "warn");
        assert_eq!(filter_for(true), "warn,npm_dep_graph=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
