//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("limits.max_username_len must be greater than 0")]
    ZeroUsernameLimit,
    #[error("limits.max_email_len must be greater than 0")]
    ZeroEmailLimit,
    #[error("summary.time_format must not be empty")]
    EmptyTimeFormat,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // A zero exclusive bound would reject even the empty string.
    if config.limits.max_username_len == 0 {
        errors.push(ValidationError::ZeroUsernameLimit);
    }
    if config.limits.max_email_len == 0 {
        errors.push(ValidationError::ZeroEmailLimit);
    }

    if config.summary.time_format.trim().is_empty() {
        errors.push(ValidationError::EmptyTimeFormat);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
