//! Tracing and logging setup shared by LearnHub binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide logging with the default filter (`info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}
