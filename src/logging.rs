//! Tracing subscriber setup driven by the resolved configuration.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

use crate::config::EnvironmentConfig;

/// Picks the log level from CLI verbosity and the `enableDebugLogs` flag.
///
/// `quiet` wins over everything. Otherwise the more verbose of the two sources
/// is used.
pub fn log_level(config: &EnvironmentConfig, verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 if config.enable_debug_logs() => Level::DEBUG,
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` directives are honoured on top of the computed level. Fails
/// when a global subscriber is already installed.
pub fn init_tracing(
    config: &EnvironmentConfig,
    verbosity: u8,
    quiet: bool,
) -> Result<(), TryInitError> {
    let level = log_level(config, verbosity, quiet);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_debug_logs_flag_raises_level() {
        let dev = Environment::Development.preset();
        let prod = Environment::Production.preset();

        assert_eq!(log_level(&dev, 0, false), Level::DEBUG);
        assert_eq!(log_level(&prod, 0, false), Level::INFO);
    }

    #[test]
    fn test_verbosity_and_quiet() {
        let prod = Environment::Production.preset();

        assert_eq!(log_level(&prod, 1, false), Level::DEBUG);
        assert_eq!(log_level(&prod, 3, false), Level::TRACE);
        assert_eq!(log_level(&Environment::Development.preset(), 2, true), Level::ERROR);
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = Environment::Production.preset();

        // the first call may already have lost to another test in this binary
        let _first = init_tracing(&config, 0, true);
        assert!(init_tracing(&config, 0, true).is_err());
    }
}
