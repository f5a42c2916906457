//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{
    default_max_email_len, default_max_login_failures, default_max_username_len,
    default_time_format,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "config_io",
            Self::Parse(_) => "config_parse",
        }
    }
}

/// Account record configuration.
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Input limits applied when accounts are created or edited.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Summary printer settings.
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Input limits for account fields.
///
/// Length limits are exclusive: a value must be strictly shorter than the
/// configured size.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_username_len")]
    pub max_username_len: usize,

    #[serde(default = "default_max_email_len")]
    pub max_email_len: usize,

    /// Consecutive failed logins tolerated before the account is refused.
    #[serde(default = "default_max_login_failures")]
    pub max_login_failures: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_username_len: default_max_username_len(),
            max_email_len: default_max_email_len(),
            max_login_failures: default_max_login_failures(),
        }
    }
}

/// Summary printer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    /// chrono `strftime` pattern used for every timestamp in the summary.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_default_values() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.max_username_len, 32);
        assert_eq!(limits.max_email_len, 100);
        assert_eq!(limits.max_login_failures, 10);
    }

    #[test]
    fn summary_default_time_format() {
        let summary = SummaryConfig::default();
        assert_eq!(summary.time_format, "%Y-%m-%d %H:%M:%S UTC");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.limits.max_username_len, 32);
        assert_eq!(config.summary.time_format, default_time_format());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [limits]
            max_login_failures = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.max_login_failures, 3);
        assert_eq!(config.limits.max_email_len, 100);
    }

    #[test]
    fn summary_section_overrides_format() {
        let config = Config::from_toml(
            r#"
            [summary]
            time_format = "%s"
            "#,
        )
        .unwrap();
        assert_eq!(config.summary.time_format, "%s");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::from_toml("[limits\nmax_email_len = ").unwrap_err();
        assert_eq!(err.error_code(), "config_parse");
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = Config::from_toml("[limits]\nmax_email_len = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_nonexistent_file_is_io_error() {
        let err = Config::load("/nonexistent/path/account.toml").unwrap_err();
        assert_eq!(err.error_code(), "config_io");
    }
}
