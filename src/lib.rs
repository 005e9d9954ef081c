//! # Tickly Environment
//!
//! Typed, validated environment configuration for the Tickly web application.
//!
//! An [`EnvironmentConfig`] carries the settings that differ between
//! deployments: the production flag, application version, REST API base URL,
//! debug logging, mock mode and its delay, feature flags, and error-reporting
//! (Sentry) settings. Records are immutable and are handed to consumers
//! explicitly rather than read from a global.
//!
//! ## Quick Start
//!
//! ```rust
//! use tickly_environment::config::{Environment, Feature};
//!
//! let config = Environment::Development.preset();
//!
//! assert!(!config.production());
//! assert_eq!(config.mock_delay_ms(), 500);
//! assert!(!config.features().is_enabled(Feature::SeatingMap));
//! assert!(!config.sentry().is_reporting_active());
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: the record, its builder, presets, and file/env/CLI loading
//! - [`logging`]: tracing setup driven by `enableDebugLogs`
//!
//! ## Configuration
//!
//! Configuration follows a precedence chain:
//! 1. Variant preset or configuration file (TOML/JSON)
//! 2. Environment variables (`TICKLY_*`)
//! 3. CLI arguments
//!
//! See [`config::EnvironmentConfig`] for all available fields.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Full version string with name
pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Environment configuration record, presets and loading.
pub mod config;

/// Tracing subscriber initialization.
pub mod logging;

pub use config::{
    CliArgs, ConfigError, Environment, EnvironmentConfig, EnvironmentConfigBuilder, Feature,
    FeatureFlags, SentryConfig,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tickly_environment::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{
        CliArgs, ConfigError, Environment, EnvironmentConfig, Feature, FeatureFlags, SentryConfig,
    };
    pub use crate::{FULL_VERSION, NAME, VERSION};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
        assert!(FULL_VERSION.contains(VERSION));
        assert!(FULL_VERSION.contains(NAME));
    }

    #[test]
    fn test_preset_version_is_crate_version() {
        assert_eq!(Environment::Development.preset().version(), VERSION);
    }
}
