//! Tracing/logging setup shared by every binary and test harness.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Like [`init`], but with a different fallback filter for when `RUST_LOG`
/// is unset (e.g. `"codeflix_catalog=debug"`).
pub fn init_with_default(directives: &str) {
    tracing::init(directives);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
