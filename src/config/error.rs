//! Error type shared by construction, loading and saving of configurations.

use thiserror::Error;

/// Errors raised while building an [`EnvironmentConfig`](super::EnvironmentConfig)
/// or moving one in and out of a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment file could not be read or written.
    #[error("Cannot access environment file: {0}")]
    IoError(#[from] std::io::Error),

    /// A `.toml` environment file is malformed or carries unknown keys.
    #[error("Malformed TOML environment file: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The record could not be rendered as TOML.
    #[error("Cannot render environment as TOML: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A `.json` environment file is malformed, or rendering to JSON failed.
    #[error("Malformed JSON environment: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field is missing, out of range (negative `mockDelay`), malformed
    /// (`version`, `apiUrl`, `sentry.dsn`), or an override could not be parsed.
    #[error("Invalid environment configuration: {0}")]
    ValidationError(String),

    /// The file extension is neither `toml` nor `json`.
    #[error("Unsupported environment file extension: '{0}' (expected toml or json)")]
    UnsupportedFormat(String),
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::ValidationError(message.into())
    }

    /// Returns true for construction-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = ConfigError::invalid("missing field `apiUrl`");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid environment configuration: missing field `apiUrl`"
        );

        let err = ConfigError::UnsupportedFormat("yaml".to_string());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("'yaml'"));
    }
}
