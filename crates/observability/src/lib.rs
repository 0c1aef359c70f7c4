//! Tracing/logging (shared setup).

/// Initialize process-wide logging with `default_filter` unless `RUST_LOG` is set.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
