//! Logging setup for the binary

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for caltrack itself when `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "caltrack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))
}
