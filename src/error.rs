//! Unified error handling for slirc-account.
//!
//! Mutators on an absent record never error (they no-op). The errors here
//! cover input validation and summary output.

use thiserror::Error;

// ============================================================================
// Account Errors (construction and field updates)
// ============================================================================

/// Errors raised when account input fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("username too long: {len} bytes (limit {max})")]
    UsernameTooLong { len: usize, max: usize },

    #[error("email too long: {len} bytes (limit {max})")]
    EmailTooLong { len: usize, max: usize },

    #[error("email contains spaces or non-printable characters")]
    EmailUnprintable,

    #[error("birthdate must be 10 characters in YYYY-MM-DD format, got {0}")]
    BirthdateLength(usize),

    #[error("birthdate is missing a dash separator")]
    BirthdateSeparator,

    #[error("birthdate contains non-digit characters")]
    BirthdateNonDigit,

    #[error("birthdate is not a calendar date: {0}")]
    BirthdateInvalidDate(String),
}

impl AccountError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UsernameTooLong { .. } => "username_too_long",
            Self::EmailTooLong { .. } => "email_too_long",
            Self::EmailUnprintable => "email_unprintable",
            Self::BirthdateLength(_) => "birthdate_length",
            Self::BirthdateSeparator => "birthdate_separator",
            Self::BirthdateNonDigit => "birthdate_non_digit",
            Self::BirthdateInvalidDate(_) => "birthdate_invalid_date",
        }
    }
}

// ============================================================================
// Summary Errors (output)
// ============================================================================

/// Errors raised while writing an account summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}

impl SummaryError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_error_codes() {
        assert_eq!(
            AccountError::UsernameTooLong { len: 40, max: 32 }.error_code(),
            "username_too_long"
        );
        assert_eq!(AccountError::EmailUnprintable.error_code(), "email_unprintable");
        assert_eq!(AccountError::BirthdateLength(3).error_code(), "birthdate_length");
    }

    #[test]
    fn test_account_error_display() {
        let err = AccountError::EmailTooLong { len: 120, max: 100 };
        assert_eq!(err.to_string(), "email too long: 120 bytes (limit 100)");
    }

    #[test]
    fn test_summary_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = SummaryError::from(io);
        assert_eq!(err.error_code(), "io_error");
        assert!(err.to_string().contains("closed"));
    }
}
