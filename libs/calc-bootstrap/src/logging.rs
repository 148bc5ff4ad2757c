//! Human-readable `tracing` output on stderr.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins when set, otherwise `cfg.level`.
fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|e| {
            eprintln!("invalid log level '{}' ({e}), falling back to 'info'", cfg.level);
            EnvFilter::new("info")
        })
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(cfg: &LoggingConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg))
        .with_writer(std::io::stderr)
        .with_ansi(cfg.ansi)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level = %cfg.level, "logging initialized");
    }
}
