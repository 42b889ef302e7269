//! Logging init: stderr only, so stdout carries nothing but status lines.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Per-URL progress is logged at
/// `debug`, so a default run stays silent unless something breaks the run
/// itself.
pub const DEFAULT_FILTER: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to stderr.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
