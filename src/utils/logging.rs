//! Logging setup for the command-line tool.

use tracing_subscriber::filter::EnvFilter;

/// Environment variable read after `RUST_LOG`.
pub const LOG_ENV: &str = "SHORTEX_LOG";

/// Install a stderr `fmt` subscriber.
///
/// The filter comes from `RUST_LOG`, then `SHORTEX_LOG`, then `default_level`.
/// Installing twice is harmless; the second call is ignored.
pub fn init_logging(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
