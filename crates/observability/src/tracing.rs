//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(err) = installed {
        ::tracing::debug!(error = %err, "global subscriber already installed; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_tolerates_bad_filters() {
        let config = ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        };
        init(&config);
        init(&ObservabilityConfig::default());
        ::tracing::info!("still logging after repeated init");
    }
}
