//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter: `RUST_LOG` wins, `fallback` otherwise.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(fallback: &str) -> bool {
    // JSON logs + timestamps, configurable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let _ = init("debug");
        assert!(!init("debug"));
        ::tracing::info!(component = "observability", "still logging after re-init");
    }

    #[test]
    fn fallback_filter_is_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter("warn").to_string(), "warn");
        }
    }
}
