//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins over `default_level` so a single run can be made verbose
/// without touching the configuration file. Stdout stays reserved for
/// generated source.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
