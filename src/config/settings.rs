//! Loading and saving configurations.
//!
//! Configurations are resolved through a precedence chain where later sources
//! override earlier ones:
//! 1. Variant preset, or a configuration file (TOML or JSON)
//! 2. Environment variables (`TICKLY_*`)
//! 3. CLI arguments
//!
//! Every layer rebuilds the record through [`EnvironmentConfigBuilder::build`],
//! so the final value is always validated.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::environment::{EnvironmentConfig, EnvironmentConfigBuilder, Feature};
use super::error::ConfigError;
use super::variant::Environment;

/// Prefix shared by every environment variable read by the loader.
pub const ENV_PREFIX: &str = "TICKLY_";

/// Environment variable selecting the deployment variant.
pub const ENV_VARIANT: &str = "TICKLY_ENV";

impl EnvironmentConfig {
    /// Loads a complete configuration from a file.
    ///
    /// The format is chosen by extension (`.toml` or `.json`). Every field has
    /// to be present in the file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tickly_environment::config::EnvironmentConfig;
    ///
    /// let config = EnvironmentConfig::from_file("environment.prod.toml").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");
        let content = fs::read_to_string(path)?;

        match extension_of(path).as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            ext => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let builder: EnvironmentConfigBuilder = toml::from_str(content)?;
        builder.build()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let builder: EnvironmentConfigBuilder = serde_json::from_str(content)?;
        builder.build()
    }

    /// Saves the configuration to a file, format chosen by extension.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = match extension_of(path).as_str() {
            "toml" => self.to_toml_string()?,
            "json" => self.to_json_string()?,
            ext => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
        };

        fs::write(path, content)?;
        debug!(path = %path.display(), "Configuration written");
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Applies overrides from the process environment.
    pub fn merge_with_env(self) -> Result<Self, ConfigError> {
        self.merge_with_vars(prefixed_process_vars()?)
    }

    /// Applies overrides from `TICKLY_*` variables.
    ///
    /// Recognised variables:
    /// - `TICKLY_PRODUCTION`, `TICKLY_ENABLE_DEBUG_LOGS`, `TICKLY_USE_MOCKS`,
    ///   `TICKLY_SENTRY_ENABLED`: booleans (`1/true/yes/on`, `0/false/no/off`)
    /// - `TICKLY_VERSION`, `TICKLY_API_URL`, `TICKLY_SENTRY_DSN`: strings
    /// - `TICKLY_MOCK_DELAY`: milliseconds
    /// - `TICKLY_FEATURE_<FLAG>`: boolean, e.g. `TICKLY_FEATURE_ENABLE_SEATING_MAP`
    ///
    /// Variables without the prefix are ignored. A malformed value is an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tickly_environment::config::Environment;
    ///
    /// let config = Environment::Development
    ///     .preset()
    ///     .merge_with_vars([("TICKLY_USE_MOCKS", "true")])
    ///     .unwrap();
    /// assert!(config.use_mocks());
    /// ```
    pub fn merge_with_vars<I, K, V>(self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = self.to_builder();
        let mut applied = 0usize;

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            builder = match name {
                "PRODUCTION" => builder.with_production(parse_flag(key, value)?),
                "VERSION" => builder.with_version(value),
                "API_URL" => builder.with_api_url(value),
                "ENABLE_DEBUG_LOGS" => builder.with_debug_logs(parse_flag(key, value)?),
                "USE_MOCKS" => builder.with_mocks(parse_flag(key, value)?),
                "MOCK_DELAY" => builder.with_mock_delay(parse_delay(key, value)?),
                "SENTRY_ENABLED" => builder.with_sentry_enabled(parse_flag(key, value)?),
                "SENTRY_DSN" => builder.with_sentry_dsn(value),
                "ENV" => continue,
                other => match other.strip_prefix("FEATURE_") {
                    Some(flag) => {
                        let feature: Feature = flag.parse().map_err(|_| {
                            ConfigError::ValidationError(format!(
                                "{} does not name a feature flag",
                                key
                            ))
                        })?;
                        builder.with_feature(feature, parse_flag(key, value)?)
                    }
                    None => {
                        debug!(variable = key, "Ignoring unrecognised variable");
                        continue;
                    }
                },
            };
            applied += 1;
        }

        if applied > 0 {
            debug!(count = applied, "Applied environment overrides");
        }
        builder.build()
    }

    /// Applies CLI argument overrides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tickly_environment::config::{CliArgs, Environment};
    ///
    /// let args = CliArgs {
    ///     use_mocks: Some(true),
    ///     mock_delay: Some(1200),
    ///     ..Default::default()
    /// };
    ///
    /// let config = Environment::Development.preset().merge_with_args(&args).unwrap();
    /// assert_eq!(config.mock_delay_ms(), 1200);
    /// ```
    pub fn merge_with_args(self, args: &CliArgs) -> Result<Self, ConfigError> {
        let mut builder = self.to_builder();

        if let Some(production) = args.production {
            builder = builder.with_production(production);
        }
        if let Some(ref version) = args.version {
            builder = builder.with_version(version.clone());
        }
        if let Some(ref api_url) = args.api_url {
            builder = builder.with_api_url(api_url.clone());
        }
        if let Some(debug_logs) = args.enable_debug_logs {
            builder = builder.with_debug_logs(debug_logs);
        }
        if let Some(use_mocks) = args.use_mocks {
            builder = builder.with_mocks(use_mocks);
        }
        if let Some(delay) = args.mock_delay {
            builder = builder.with_mock_delay(delay);
        }
        for &(feature, enabled) in &args.features {
            builder = builder.with_feature(feature, enabled);
        }
        if let Some(enabled) = args.sentry_enabled {
            builder = builder.with_sentry_enabled(enabled);
        }
        if let Some(ref dsn) = args.sentry_dsn {
            builder = builder.with_sentry_dsn(dsn.clone());
        }

        builder.build()
    }
}

/// CLI argument structure for overriding configuration values.
///
/// All fields are optional to allow partial overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Configuration file path. Replaces the variant preset as the base layer.
    pub config_file: Option<PathBuf>,
    /// Deployment variant whose preset is the base layer.
    pub environment: Option<Environment>,
    pub production: Option<bool>,
    /// Application version.
    pub version: Option<String>,
    /// REST API base URL.
    pub api_url: Option<String>,
    pub enable_debug_logs: Option<bool>,
    pub use_mocks: Option<bool>,
    /// Mock delay in milliseconds.
    pub mock_delay: Option<i64>,
    /// Individual feature flag overrides, applied in order.
    pub features: Vec<(Feature, bool)>,
    pub sentry_enabled: Option<bool>,
    pub sentry_dsn: Option<String>,
}

impl CliArgs {
    /// Creates an empty CliArgs instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the final configuration against the process environment.
    ///
    /// ```rust,no_run
    /// use tickly_environment::config::CliArgs;
    ///
    /// let args = CliArgs {
    ///     config_file: Some("environment.toml".into()),
    ///     use_mocks: Some(true),
    ///     ..Default::default()
    /// };
    ///
    /// let config = args.load_settings().unwrap();
    /// ```
    pub fn load_settings(&self) -> Result<EnvironmentConfig, ConfigError> {
        self.load_settings_with_vars(prefixed_process_vars()?)
    }

    /// Resolves the final configuration against the given variables.
    pub fn load_settings_with_vars<I, K, V>(
        &self,
        vars: I,
    ) -> Result<EnvironmentConfig, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();

        // Start with the file or the variant preset
        let base = match self.config_file {
            Some(ref path) => {
                info!(path = %path.display(), "Using configuration file as base");
                EnvironmentConfig::from_file(path)?
            }
            None => {
                let environment = self.select_environment(&vars)?;
                info!(%environment, "Using preset as base");
                environment.preset()
            }
        };

        base.merge_with_vars(vars)?.merge_with_args(self)
    }

    /// Picks the variant: `--env` first, then `TICKLY_ENV`, then development.
    pub fn select_environment(
        &self,
        vars: &[(String, String)],
    ) -> Result<Environment, ConfigError> {
        if let Some(environment) = self.environment {
            return Ok(environment);
        }
        vars.iter()
            .find(|(key, _)| key == ENV_VARIANT)
            .map(|(_, value)| value.parse())
            .unwrap_or(Ok(Environment::default()))
    }
}

/// Parses a `NAME=BOOL` feature assignment such as `seating-map=true`.
///
/// A bare name means `true`.
pub fn parse_feature_assignment(raw: &str) -> Result<(Feature, bool), ConfigError> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.parse()?, parse_flag(name, value)?)),
        None => Ok((raw.parse()?, true)),
    }
}

/// Collects `TICKLY_*` variables from the process environment.
///
/// Keys that are not UTF-8 or lack the prefix are skipped; a prefixed variable
/// whose value is not UTF-8 is an error.
fn prefixed_process_vars() -> Result<Vec<(String, String)>, ConfigError> {
    let mut vars = Vec::new();
    for (key, value) in env::vars_os() {
        let Some(key) = key.to_str().filter(|k| k.starts_with(ENV_PREFIX)) else {
            continue;
        };
        let value = value.into_string().map_err(|_| {
            ConfigError::ValidationError(format!("{} is not valid UTF-8", key))
        })?;
        vars.push((key.to_string(), value));
    }
    Ok(vars)
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ValidationError(format!(
            "{} expects a boolean (true/false, 1/0, yes/no, on/off), got '{}'",
            name, raw
        ))),
    }
}

fn parse_delay(name: &str, raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse().map_err(|_| {
        ConfigError::ValidationError(format!(
            "{} expects a number of milliseconds, got '{}'",
            name, raw
        ))
    })
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}
