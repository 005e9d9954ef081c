//! Configuration module for tickly-environment.
//!
//! This module provides the environment configuration record and its loading:
//! - An immutable, validated [`EnvironmentConfig`] built through a builder
//! - Development and production presets
//! - Loading from files (TOML/JSON)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use tickly_environment::config::{EnvironmentConfig, Environment};
//!
//! // Start from a preset
//! let config = Environment::Development.preset();
//!
//! // Load from a specific file
//! let config = EnvironmentConfig::from_file("environment.toml").unwrap();
//!
//! // Override with environment variables
//! let config = config.merge_with_env().unwrap();
//! ```

mod environment;
mod error;
mod settings;
mod variant;

pub use environment::{
    EnvironmentConfig, EnvironmentConfigBuilder, Feature, FeatureFlags, SentryConfig,
};
pub use error::ConfigError;
pub use settings::{parse_feature_assignment, CliArgs, ENV_PREFIX, ENV_VARIANT};
pub use variant::Environment;
