//! The environment configuration record and its builder.
//!
//! An [`EnvironmentConfig`] is immutable once built: every field is private and
//! only exposed through getters. Overrides are expressed by turning a record
//! back into a builder with [`EnvironmentConfig::to_builder`] and building a new
//! record, which goes through the same validation as the first one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use super::error::ConfigError;

/// Named feature areas that can be switched on or off per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Self-service account creation.
    UserRegistration,
    /// Creating events.
    EventCreation,
    /// Booking tickets for events.
    EventBooking,
    /// Creating venues / structures.
    StructureCreation,
    /// Interactive seating map.
    SeatingMap,
}

impl Feature {
    /// Every feature, in declaration order.
    pub const ALL: [Feature; 5] = [
        Feature::UserRegistration,
        Feature::EventCreation,
        Feature::EventBooking,
        Feature::StructureCreation,
        Feature::SeatingMap,
    ];

    /// Key used in configuration files (`enableSeatingMap`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::UserRegistration => "enableUserRegistration",
            Feature::EventCreation => "enableEventCreation",
            Feature::EventBooking => "enableEventBooking",
            Feature::StructureCreation => "enableStructureCreation",
            Feature::SeatingMap => "enableSeatingMap",
        }
    }

    /// snake_case form of the key (`enable_seating_map`).
    pub fn snake_name(&self) -> &'static str {
        match self {
            Feature::UserRegistration => "enable_user_registration",
            Feature::EventCreation => "enable_event_creation",
            Feature::EventBooking => "enable_event_booking",
            Feature::StructureCreation => "enable_structure_creation",
            Feature::SeatingMap => "enable_seating_map",
        }
    }

    /// Short kebab-case name used on the command line (`seating-map`).
    pub fn short_name(&self) -> &'static str {
        match self {
            Feature::UserRegistration => "user-registration",
            Feature::EventCreation => "event-creation",
            Feature::EventBooking => "event-booking",
            Feature::StructureCreation => "structure-creation",
            Feature::SeatingMap => "seating-map",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Feature::ALL
            .into_iter()
            .find(|feature| {
                needle == feature.as_str()
                    || needle.eq_ignore_ascii_case(feature.snake_name())
                    || needle.eq_ignore_ascii_case(feature.short_name())
            })
            .ok_or_else(|| {
                ConfigError::invalid(format!(
                    "Unknown feature: {}. Valid features are: {}",
                    s,
                    Feature::ALL.map(|f| f.short_name()).join(", ")
                ))
            })
    }
}

/// The set of feature flags. Each flag independently gates one feature area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureFlags {
    enable_user_registration: bool,
    enable_event_creation: bool,
    enable_event_booking: bool,
    enable_structure_creation: bool,
    enable_seating_map: bool,
}

impl FeatureFlags {
    /// Flags with every feature switched on.
    pub fn all_enabled() -> Self {
        Self {
            enable_user_registration: true,
            enable_event_creation: true,
            enable_event_booking: true,
            enable_structure_creation: true,
            enable_seating_map: true,
        }
    }

    /// Flags with every feature switched off.
    pub fn all_disabled() -> Self {
        Self {
            enable_user_registration: false,
            enable_event_creation: false,
            enable_event_booking: false,
            enable_structure_creation: false,
            enable_seating_map: false,
        }
    }

    /// Returns a copy with `feature` set to `enabled`.
    ///
    /// ```rust
    /// use tickly_environment::config::{Feature, FeatureFlags};
    ///
    /// let flags = FeatureFlags::all_enabled().with(Feature::SeatingMap, false);
    /// assert!(!flags.is_enabled(Feature::SeatingMap));
    /// assert!(flags.is_enabled(Feature::EventBooking));
    /// ```
    pub fn with(mut self, feature: Feature, enabled: bool) -> Self {
        *self.slot(feature) = enabled;
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::UserRegistration => self.enable_user_registration,
            Feature::EventCreation => self.enable_event_creation,
            Feature::EventBooking => self.enable_event_booking,
            Feature::StructureCreation => self.enable_structure_creation,
            Feature::SeatingMap => self.enable_seating_map,
        }
    }

    /// Features that are switched on, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL
            .into_iter()
            .filter(move |feature| self.is_enabled(*feature))
    }

    pub fn enable_user_registration(&self) -> bool {
        self.enable_user_registration
    }

    pub fn enable_event_creation(&self) -> bool {
        self.enable_event_creation
    }

    pub fn enable_event_booking(&self) -> bool {
        self.enable_event_booking
    }

    pub fn enable_structure_creation(&self) -> bool {
        self.enable_structure_creation
    }

    pub fn enable_seating_map(&self) -> bool {
        self.enable_seating_map
    }

    fn slot(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::UserRegistration => &mut self.enable_user_registration,
            Feature::EventCreation => &mut self.enable_event_creation,
            Feature::EventBooking => &mut self.enable_event_booking,
            Feature::StructureCreation => &mut self.enable_structure_creation,
            Feature::SeatingMap => &mut self.enable_seating_map,
        }
    }
}

/// Error-reporting (Sentry) integration settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentryConfig {
    enabled: bool,
    dsn: String,
}

impl SentryConfig {
    pub fn new(enabled: bool, dsn: impl Into<String>) -> Self {
        Self {
            enabled,
            dsn: dsn.into(),
        }
    }

    /// Reporting switched off, no DSN.
    pub fn disabled() -> Self {
        Self::new(false, "")
    }

    /// Reporting switched on, sending to `dsn`.
    pub fn reporting_to(dsn: impl Into<String>) -> Self {
        Self::new(true, dsn)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Whether an error reporter reading these settings would send reports.
    pub fn is_reporting_active(&self) -> bool {
        self.enabled && !self.dsn.is_empty()
    }

    /// Validates the Sentry settings.
    ///
    /// A disabled integration accepts any DSN, including an empty one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        if self.dsn.trim().is_empty() {
            return Err(ConfigError::invalid(
                "sentry.dsn cannot be empty when sentry.enabled is true",
            ));
        }

        let dsn = Url::parse(&self.dsn).map_err(|e| {
            ConfigError::invalid(format!("sentry.dsn is not a valid URL ({}): {}", e, self.dsn))
        })?;
        if !matches!(dsn.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(format!(
                "sentry.dsn must use http or https, got {}",
                dsn.scheme()
            )));
        }
        if dsn.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::invalid("sentry.dsn must name a host"));
        }
        if dsn.username().is_empty() {
            return Err(ConfigError::invalid(
                "sentry.dsn must carry a public key (https://<key>@<host>/<project>)",
            ));
        }
        Ok(())
    }
}

/// Environment-specific settings of the application.
///
/// Built with [`EnvironmentConfig::builder`]; every field has to be supplied.
///
/// # Example
///
/// ```rust
/// use tickly_environment::config::{EnvironmentConfig, FeatureFlags, Feature, SentryConfig};
///
/// let config = EnvironmentConfig::builder()
///     .with_production(false)
///     .with_version("0.1.0")
///     .with_api_url("")
///     .with_debug_logs(true)
///     .with_mocks(false)
///     .with_mock_delay(500)
///     .with_features(FeatureFlags::all_enabled().with(Feature::SeatingMap, false))
///     .with_sentry(SentryConfig::disabled())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mock_delay_ms(), 500);
/// assert!(!config.features().enable_seating_map());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EnvironmentConfigBuilder")]
pub struct EnvironmentConfig {
    production: bool,
    version: String,
    api_url: String,
    enable_debug_logs: bool,
    use_mocks: bool,
    mock_delay: u64,
    features: FeatureFlags,
    sentry: SentryConfig,
}

impl EnvironmentConfig {
    /// Starts an empty builder.
    pub fn builder() -> EnvironmentConfigBuilder {
        EnvironmentConfigBuilder::default()
    }

    /// Returns a builder pre-filled with this record's values.
    pub fn to_builder(&self) -> EnvironmentConfigBuilder {
        EnvironmentConfigBuilder {
            production: Some(self.production),
            version: Some(self.version.clone()),
            api_url: Some(self.api_url.clone()),
            enable_debug_logs: Some(self.enable_debug_logs),
            use_mocks: Some(self.use_mocks),
            // built from an i64, so it always fits
            mock_delay: Some(i64::try_from(self.mock_delay).unwrap_or(i64::MAX)),
            features: Some(self.features),
            sentry: Some(self.sentry.clone()),
            ..Default::default()
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Base URL of the REST API. Empty means requests are relative to the host.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn enable_debug_logs(&self) -> bool {
        self.enable_debug_logs
    }

    pub fn use_mocks(&self) -> bool {
        self.use_mocks
    }

    /// Artificial latency of mocked responses in milliseconds.
    pub fn mock_delay_ms(&self) -> u64 {
        self.mock_delay
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay)
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    pub fn sentry(&self) -> &SentryConfig {
        &self.sentry
    }
}

/// Collects field values for an [`EnvironmentConfig`].
///
/// The builder is also the deserialization target for configuration files, so
/// a file goes through exactly the same checks as programmatic construction.
/// Per-flag and per-Sentry-field overrides are layered on top of the grouped
/// values when [`build`](Self::build) runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfigBuilder {
    production: Option<bool>,
    version: Option<String>,
    api_url: Option<String>,
    enable_debug_logs: Option<bool>,
    use_mocks: Option<bool>,
    mock_delay: Option<i64>,
    features: Option<FeatureFlags>,
    sentry: Option<SentryConfig>,

    #[serde(skip)]
    feature_overrides: Vec<(Feature, bool)>,
    #[serde(skip)]
    sentry_enabled: Option<bool>,
    #[serde(skip)]
    sentry_dsn: Option<String>,
}

impl EnvironmentConfigBuilder {
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = Some(production);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_debug_logs(mut self, enabled: bool) -> Self {
        self.enable_debug_logs = Some(enabled);
        self
    }

    pub fn with_mocks(mut self, enabled: bool) -> Self {
        self.use_mocks = Some(enabled);
        self
    }

    /// Sets the mock delay in milliseconds. Negative values fail in `build`.
    pub fn with_mock_delay(mut self, delay_ms: i64) -> Self {
        self.mock_delay = Some(delay_ms);
        self
    }

    /// Replaces the whole flag set and drops earlier per-flag overrides.
    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = Some(features);
        self.feature_overrides.clear();
        self
    }

    /// Overrides a single flag on top of the flag set.
    pub fn with_feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.feature_overrides.push((feature, enabled));
        self
    }

    /// Replaces the Sentry settings and drops earlier per-field overrides.
    pub fn with_sentry(mut self, sentry: SentryConfig) -> Self {
        self.sentry = Some(sentry);
        self.sentry_enabled = None;
        self.sentry_dsn = None;
        self
    }

    pub fn with_sentry_enabled(mut self, enabled: bool) -> Self {
        self.sentry_enabled = Some(enabled);
        self
    }

    pub fn with_sentry_dsn(mut self, dsn: impl Into<String>) -> Self {
        self.sentry_dsn = Some(dsn.into());
        self
    }

    /// Validates the collected values and produces the record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when a field is missing,
    /// `mockDelay` is negative, `version` is not a semantic version, `apiUrl`
    /// is neither empty, a `/` path nor an absolute http(s) URL, or Sentry is
    /// enabled without a usable DSN.
    pub fn build(self) -> Result<EnvironmentConfig, ConfigError> {
        let features = self.resolve_features()?;
        let sentry = self.resolve_sentry()?;

        let production = require(self.production, "production")?;
        let version = require(self.version, "version")?;
        let api_url = require(self.api_url, "apiUrl")?;
        let enable_debug_logs = require(self.enable_debug_logs, "enableDebugLogs")?;
        let use_mocks = require(self.use_mocks, "useMocks")?;
        let mock_delay = require(self.mock_delay, "mockDelay")?;

        let mock_delay = u64::try_from(mock_delay).map_err(|_| {
            ConfigError::invalid(format!(
                "mockDelay must be non-negative, got {}",
                mock_delay
            ))
        })?;
        validate_version(&version)?;
        validate_api_url(&api_url)?;
        sentry.validate()?;

        Ok(EnvironmentConfig {
            production,
            version,
            api_url,
            enable_debug_logs,
            use_mocks,
            mock_delay,
            features,
            sentry,
        })
    }

    fn resolve_features(&self) -> Result<FeatureFlags, ConfigError> {
        let apply = |flags: FeatureFlags| {
            self.feature_overrides
                .iter()
                .fold(flags, |flags, &(feature, enabled)| flags.with(feature, enabled))
        };

        if let Some(base) = self.features {
            return Ok(apply(base));
        }

        // No grouped value: every flag has to come from an override.
        if let Some(missing) = Feature::ALL
            .into_iter()
            .find(|feature| !self.feature_overrides.iter().any(|(f, _)| f == feature))
        {
            return Err(ConfigError::invalid(format!(
                "missing field `features.{}`",
                missing
            )));
        }
        Ok(apply(FeatureFlags::all_disabled()))
    }

    fn resolve_sentry(&self) -> Result<SentryConfig, ConfigError> {
        let enabled = self
            .sentry_enabled
            .or(self.sentry.as_ref().map(SentryConfig::enabled));
        let dsn = self
            .sentry_dsn
            .clone()
            .or_else(|| self.sentry.as_ref().map(|s| s.dsn.clone()));

        Ok(SentryConfig::new(
            require(enabled, "sentry.enabled")?,
            require(dsn, "sentry.dsn")?,
        ))
    }
}

impl TryFrom<EnvironmentConfigBuilder> for EnvironmentConfig {
    type Error = ConfigError;

    fn try_from(builder: EnvironmentConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::invalid(format!("missing field `{}`", field)))
}

/// Accepts `MAJOR.MINOR.PATCH` with optional `-prerelease` and `+build` parts.
fn validate_version(version: &str) -> Result<(), ConfigError> {
    semver::Version::parse(version).map(|_| ()).map_err(|e| {
        ConfigError::invalid(format!(
            "version must be a semantic version (MAJOR.MINOR.PATCH), got '{}': {}",
            version, e
        ))
    })
}

fn validate_api_url(api_url: &str) -> Result<(), ConfigError> {
    if api_url.is_empty() || api_url.starts_with('/') {
        return Ok(());
    }

    let url = Url::parse(api_url).map_err(|e| {
        ConfigError::invalid(format!(
            "apiUrl must be empty, a path starting with '/', or an absolute URL ({}): {}",
            e, api_url
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(format!(
            "apiUrl must use http or https, got {}",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::invalid("apiUrl must name a host"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> EnvironmentConfigBuilder {
        EnvironmentConfig::builder()
            .with_production(false)
            .with_version("0.1.0")
            .with_api_url("")
            .with_debug_logs(true)
            .with_mocks(false)
            .with_mock_delay(500)
            .with_features(FeatureFlags::all_enabled().with(Feature::SeatingMap, false))
            .with_sentry(SentryConfig::disabled())
    }

    #[test]
    fn test_build_keeps_every_field() {
        let config = base().build().unwrap();

        assert!(!config.production());
        assert_eq!(config.version(), "0.1.0");
        assert_eq!(config.api_url(), "");
        assert!(config.enable_debug_logs());
        assert!(!config.use_mocks());
        assert_eq!(config.mock_delay_ms(), 500);
        assert_eq!(config.mock_delay(), Duration::from_millis(500));
        assert!(!config.features().enable_seating_map());
        assert!(config.features().enable_user_registration());
        assert!(!config.sentry().enabled());
        assert_eq!(config.sentry().dsn(), "");
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let err = EnvironmentConfig::builder()
            .with_production(true)
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_missing_api_url_is_named() {
        let builder = EnvironmentConfigBuilder {
            api_url: None,
            ..base()
        };
        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("apiUrl"));
    }

    #[test]
    fn test_negative_mock_delay_rejected() {
        let err = base().with_mock_delay(-1).build().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("mockDelay"));
    }

    #[test]
    fn test_zero_mock_delay_accepted() {
        let config = base().with_mock_delay(0).build().unwrap();
        assert_eq!(config.mock_delay_ms(), 0);
    }

    #[test]
    fn test_feature_override_on_top_of_set() {
        let config = base()
            .with_feature(Feature::SeatingMap, true)
            .with_feature(Feature::EventBooking, false)
            .build()
            .unwrap();

        assert!(config.features().enable_seating_map());
        assert!(!config.features().enable_event_booking());
    }

    #[test]
    fn test_with_features_drops_earlier_overrides() {
        let config = base()
            .with_feature(Feature::SeatingMap, true)
            .with_features(FeatureFlags::all_disabled())
            .build()
            .unwrap();

        assert_eq!(config.features().enabled().count(), 0);
    }

    #[test]
    fn test_features_from_overrides_only() {
        let builder = EnvironmentConfigBuilder {
            features: None,
            ..base()
        };
        let partial = builder.clone().with_feature(Feature::SeatingMap, true);
        assert!(partial.build().is_err());

        let complete = Feature::ALL
            .into_iter()
            .fold(builder, |b, f| b.with_feature(f, true));
        let config = complete.build().unwrap();
        assert_eq!(*config.features(), FeatureFlags::all_enabled());
    }

    #[test]
    fn test_sentry_enabled_requires_dsn() {
        let err = base()
            .with_sentry(SentryConfig::reporting_to(""))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("sentry.dsn"));
    }

    #[test]
    fn test_sentry_field_overrides() {
        let config = base()
            .with_sentry_enabled(true)
            .with_sentry_dsn("https://abc123@o1.ingest.sentry.io/42")
            .build()
            .unwrap();

        assert!(config.sentry().is_reporting_active());
        assert_eq!(config.sentry().dsn(), "https://abc123@o1.ingest.sentry.io/42");
    }

    #[test]
    fn test_sentry_dsn_shape() {
        assert!(SentryConfig::reporting_to("not a url").validate().is_err());
        assert!(SentryConfig::reporting_to("ftp://key@host/1").validate().is_err());
        assert!(SentryConfig::reporting_to("https://host/1").validate().is_err());
        assert!(SentryConfig::reporting_to("https://key@host/1").validate().is_ok());
        // unused while disabled
        assert!(SentryConfig::new(false, "garbage").validate().is_ok());
    }

    #[test]
    fn test_version_validation() {
        for ok in ["0.1.0", "1.22.333", "1.0.0-rc.1", "1.0.0+build.5", "2.0.0-beta-2+sha.abc"] {
            assert!(validate_version(ok).is_ok(), "{} should be accepted", ok);
        }
        for bad in [
            "", "1", "1.0", "1.0.0.0", "01.0.0", "1.a.0", "1.0.0-", "1.0.0+", "v1.0.0",
            "1.0.0-rc.01",
        ] {
            assert!(validate_version(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_api_url_validation() {
        let accepted = [
            "",
            "/api",
            "/api/v1/",
            "http://localhost:8080",
            "https://api.tickly.fr/api/v1",
        ];
        for ok in accepted {
            assert!(validate_api_url(ok).is_ok(), "{} should be accepted", ok);
        }
        for bad in ["api", "localhost:8080/api", "ftp://files.tickly.fr", "http://"] {
            assert!(validate_api_url(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_to_builder_round_trip() {
        let config = base().build().unwrap();
        let rebuilt = config.to_builder().build().unwrap();
        assert_eq!(config, rebuilt);

        let changed = config.to_builder().with_mocks(true).build().unwrap();
        assert!(changed.use_mocks());
        assert!(!config.use_mocks());
    }

    #[test]
    fn test_feature_parsing() {
        assert_eq!("enableSeatingMap".parse::<Feature>().unwrap(), Feature::SeatingMap);
        assert_eq!("enable_event_booking".parse::<Feature>().unwrap(), Feature::EventBooking);
        assert_eq!("user-registration".parse::<Feature>().unwrap(), Feature::UserRegistration);
        assert!("teleportation".parse::<Feature>().is_err());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let config = base().build().unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["apiUrl"], "");
        assert_eq!(value["mockDelay"], 500);
        assert_eq!(value["features"]["enableSeatingMap"], false);
        assert_eq!(value["sentry"]["enabled"], false);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "production": false, "version": "0.1.0", "apiUrl": "",
            "enableDebugLogs": true, "useMocks": false, "mockDelay": -3,
            "features": {"enableUserRegistration": true, "enableEventCreation": true,
                         "enableEventBooking": true, "enableStructureCreation": true,
                         "enableSeatingMap": false},
            "sentry": {"enabled": false, "dsn": ""}
        }"#;
        assert!(serde_json::from_str::<EnvironmentConfig>(json).is_err());

        let fixed = json.replace("-3", "500");
        let config: EnvironmentConfig = serde_json::from_str(&fixed).unwrap();
        assert_eq!(config, base().build().unwrap());
    }
}
