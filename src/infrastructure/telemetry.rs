//! # Telemetry
//!
//! Installs the global `tracing` subscriber. Only binaries call this; the
//! library itself just emits events. Output goes to stderr so stdout stays
//! free for command results.

use crate::infrastructure::config::LoggingSettings;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a subscriber filtered by `RUST_LOG`, falling back to
/// `settings.level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        let settings = LoggingSettings {
            level: "not a [valid directive".to_string(),
            json: false,
        };
        init_tracing(&settings);
        assert!(!init_tracing(&LoggingSettings::default()));
    }
}
