//! Input validation for account fields.
//!
//! Length limits are exclusive upper bounds in bytes.

use crate::error::AccountError;
use chrono::NaiveDate;

/// Length of a `YYYY-MM-DD` birthdate.
pub const BIRTHDATE_LEN: usize = 10;

/// Check a username against the length limit. Empty names are allowed.
pub fn validate_username(username: &str, max_len: usize) -> Result<(), AccountError> {
    if username.len() >= max_len {
        return Err(AccountError::UsernameTooLong {
            len: username.len(),
            max: max_len,
        });
    }
    Ok(())
}

/// Check that an email fits the limit and is printable ASCII without spaces.
pub fn validate_email(email: &str, max_len: usize) -> Result<(), AccountError> {
    // Length first so oversized input is rejected before scanning it
    if email.len() >= max_len {
        return Err(AccountError::EmailTooLong {
            len: email.len(),
            max: max_len,
        });
    }
    if !email.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(AccountError::EmailUnprintable);
    }
    Ok(())
}

/// Check that a birthdate is a real `YYYY-MM-DD` date.
pub fn validate_birthdate(birthdate: &str) -> Result<(), AccountError> {
    let bytes = birthdate.as_bytes();
    if bytes.len() != BIRTHDATE_LEN {
        return Err(AccountError::BirthdateLength(bytes.len()));
    }
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(AccountError::BirthdateSeparator);
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(AccountError::BirthdateNonDigit);
    }

    NaiveDate::parse_from_str(birthdate, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| AccountError::BirthdateInvalidDate(e.to_string()))
}
