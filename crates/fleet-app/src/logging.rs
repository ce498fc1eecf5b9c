//! Log sink setup
//!
//! Domain code emits `tracing` events; this installs the subscriber that
//! receives them. `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered at `level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Level to use given the configured value and a `--verbose` flag
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}
