//! # DocxKit Logging Setup
//!
//! File: cli/src/core/logging.rs
//!
//! Installs the `tracing` subscriber shared by both binaries. Logs go to stderr so
//! that stdout carries only the pack/unpack summary.
//!
use tracing_subscriber::{fmt, EnvFilter};

/// Maps the `-v` count to a default filter directive.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
