//! The account record itself.

use super::validation::{validate_birthdate, validate_email, validate_username};
use crate::clock;
use crate::config::LimitsConfig;
use crate::error::AccountError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::Ipv4Addr;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// A single user account.
///
/// Plain data: every field is public and callers may read or write them
/// directly. Timestamps are unix seconds and use `0` as "not set".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    /// Credential exactly as supplied. Wiped when the record is dropped.
    pub credential: Zeroizing<String>,
    pub email: String,
    /// `YYYY-MM-DD`.
    pub birthdate: String,
    /// Successful logins since the last failure.
    pub login_count: u32,
    /// Consecutive failed logins.
    pub login_fail_count: u32,
    /// Unix time of the last successful login, 0 = never.
    pub last_login_time: i64,
    /// IPv4 address of the last successful login as a host-order integer, 0 = unset.
    pub last_ip: u32,
    /// Banned while this is in the future. 0 = never banned.
    pub unban_time: i64,
    /// Expired once this is in the past. 0 = never expires.
    pub expiration_time: i64,
}

impl Account {
    /// Create an account using the default input limits.
    pub fn create(
        username: &str,
        credential: &str,
        email: &str,
        birthdate: &str,
    ) -> Result<Self, AccountError> {
        Self::create_with_limits(&LimitsConfig::default(), username, credential, email, birthdate)
    }

    /// Create an account, validating input against `limits`.
    ///
    /// All counters and timestamps start at zero.
    pub fn create_with_limits(
        limits: &LimitsConfig,
        username: &str,
        credential: &str,
        email: &str,
        birthdate: &str,
    ) -> Result<Self, AccountError> {
        validate_username(username, limits.max_username_len)
            .and_then(|()| validate_email(email, limits.max_email_len))
            .and_then(|()| validate_birthdate(birthdate))
            .inspect_err(|e| {
                warn!(user = %username, code = e.error_code(), error = %e, "Account creation rejected");
            })?;

        debug!(user = %username, "Account created");

        Ok(Self {
            username: username.to_owned(),
            credential: Zeroizing::new(credential.to_owned()),
            email: email.to_owned(),
            birthdate: birthdate.to_owned(),
            ..Self::default()
        })
    }

    /// Release the record. The credential buffer is zeroed on drop.
    pub fn free(self) {
        debug!(user = %self.username, "Account released");
    }

    /// Replace the email address using the default limits.
    ///
    /// On error the previous address is kept.
    pub fn set_email(&mut self, new_email: &str) -> Result<(), AccountError> {
        self.set_email_with_limits(&LimitsConfig::default(), new_email)
    }

    /// Replace the email address, validating against `limits`.
    pub fn set_email_with_limits(
        &mut self,
        limits: &LimitsConfig,
        new_email: &str,
    ) -> Result<(), AccountError> {
        if let Err(e) = validate_email(new_email, limits.max_email_len) {
            warn!(user = %self.username, email = %new_email, error = %e, "Failed to set email");
            return Err(e);
        }
        self.email = new_email.to_owned();
        info!(user = %self.username, email = %self.email, "Email address changed");
        Ok(())
    }

    /// Address of the last successful login, if one was recorded.
    pub fn last_ip_addr(&self) -> Option<Ipv4Addr> {
        (self.last_ip != 0).then(|| Ipv4Addr::from(self.last_ip))
    }

    /// Time of the last successful login, if one was recorded and is representable.
    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        if self.last_login_time == 0 {
            return None;
        }
        clock::to_datetime(self.last_login_time)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("credential", &"<redacted>")
            .field("email", &self.email)
            .field("birthdate", &self.birthdate)
            .field("login_count", &self.login_count)
            .field("login_fail_count", &self.login_fail_count)
            .field("last_login_time", &self.last_login_time)
            .field("last_ip", &self.last_ip)
            .field("unban_time", &self.unban_time)
            .field("expiration_time", &self.expiration_time)
            .finish()
    }
}
