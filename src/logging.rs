//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset; the REPL owns stdout, so only
/// warnings reach stderr unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`
///
/// `log` records from the catalog are forwarded through the subscriber's
/// log bridge. Calling this twice is harmless; the second install is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
