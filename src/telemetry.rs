//! Telemetry helpers for hosts embedding `chart-gesture`.
//!
//! Gesture commits, discarded updates and teardown are reported through
//! `tracing`. Installing a subscriber stays the host's decision: call one of
//! the helpers below or wire your own subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chart_gesture=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"chart_gesture=trace"` while debugging gesture timing.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn helpers_are_inert_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_filter("chart_gesture=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_initialization_is_refused() {
        let _ = init_tracing_with_filter("chart_gesture=trace");
        assert!(!init_default_tracing());
    }
}
