//! Tracing subscriber setup
//!
//! Logs go to stderr so they never interleave with the board on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when neither a CLI flag nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global fmt subscriber
///
/// `filter` wins over `RUST_LOG`; with neither, [`DEFAULT_LOG_FILTER`] applies.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
