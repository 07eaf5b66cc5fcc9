//! Log setup shared by the binaries
//!
//! Logs always go to stderr so stdout carries only tool output. The filter
//! comes from `RUST_LOG` and defaults to `warn`.

use std::io;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, file and line numbers in debug builds
pub fn init() {
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .compact()
        .init();
}
