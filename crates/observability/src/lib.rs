//! Tracing/logging setup shared by hosts and tests.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
