//! Tracing/logging setup shared by binaries and tests embedding the library.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::ObservabilityConfig::from_env());
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
