//! Deployment variants and the preset configuration of each.

use std::fmt;
use std::str::FromStr;

use super::environment::{EnvironmentConfig, Feature, FeatureFlags, SentryConfig};
use super::error::ConfigError;

/// Deployment target a configuration is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local development build.
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns the preset configuration of this variant.
    ///
    /// Production ships with error reporting switched off; a deployment turns
    /// it on by supplying `sentry.enabled` and a DSN through a file, the
    /// environment, or the command line.
    pub fn preset(&self) -> EnvironmentConfig {
        let builder = EnvironmentConfig::builder()
            .with_version(crate::VERSION)
            .with_api_url("")
            .with_mocks(false)
            .with_features(default_features())
            .with_sentry(SentryConfig::disabled());

        let builder = match self {
            Environment::Development => builder
                .with_production(false)
                .with_debug_logs(true)
                .with_mock_delay(500),
            Environment::Production => builder
                .with_production(true)
                .with_debug_logs(false)
                .with_mock_delay(0),
        };

        builder.build().unwrap_or_else(|e| {
            unreachable!("preset for {} failed validation: {}", self, e)
        })
    }
}

/// Every feature area is live except the seating map.
fn default_features() -> FeatureFlags {
    FeatureFlags::all_enabled().with(Feature::SeatingMap, false)
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(ConfigError::ValidationError(format!(
                "Invalid environment: {}. Expected: development or production",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_preset_matches_declaration() {
        let config = Environment::Development.preset();

        assert!(!config.production());
        assert_eq!(config.version(), "0.1.0");
        assert_eq!(config.api_url(), "");
        assert!(config.enable_debug_logs());
        assert!(!config.use_mocks());
        assert_eq!(config.mock_delay_ms(), 500);
        assert_eq!(
            config.features().enabled().collect::<Vec<_>>(),
            vec![
                Feature::UserRegistration,
                Feature::EventCreation,
                Feature::EventBooking,
                Feature::StructureCreation,
            ]
        );
        assert!(!config.sentry().enabled());
        assert!(config.sentry().dsn().is_empty());
    }

    #[test]
    fn test_production_preset() {
        let config = Environment::Production.preset();

        assert!(config.production());
        assert!(!config.enable_debug_logs());
        assert!(!config.use_mocks());
        assert_eq!(config.mock_delay_ms(), 0);
        assert_eq!(config.features(), Environment::Development.preset().features());
    }

    #[test]
    fn test_presets_are_stable() {
        assert_eq!(Environment::Production.preset(), Environment::Production.preset());
        assert_ne!(Environment::Production.preset(), Environment::Development.preset());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" PROD ".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
