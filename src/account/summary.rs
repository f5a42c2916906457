//! Human-readable account summary.
//!
//! The block is rendered into memory first and handed to the destination
//! in a single `write_all`.

use super::Account;
use crate::clock;
use crate::config::SummaryConfig;
use crate::error::SummaryError;
use std::fmt::Write as _;
use std::io::Write;
use tracing::{error, trace, warn};

/// Placeholder for a missing identity field.
pub const UNKNOWN: &str = "(unknown)";
/// Placeholder for a missing optional field.
pub const NONE: &str = "(none)";
/// Placeholder for a timestamp that was never set.
pub const NEVER: &str = "(never)";
/// Placeholder for a value that cannot be rendered.
pub const INVALID: &str = "(invalid)";

/// Return `value`, or `placeholder` when it is empty or blank.
#[inline]
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

impl Account {
    /// Write the summary using the default [`SummaryConfig`].
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), SummaryError> {
        self.write_summary_with(out, &SummaryConfig::default())
    }

    /// Write the summary to `out`.
    pub fn write_summary_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: &SummaryConfig,
    ) -> Result<(), SummaryError> {
        let text = self.render_summary(config, clock::unix_now());
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Render the summary as of unix time `now`.
    pub fn render_summary(&self, config: &SummaryConfig, now: i64) -> String {
        let user = or_placeholder(&self.username, UNKNOWN);

        let last_login = if self.last_login_time == 0 {
            NEVER.to_string()
        } else {
            render_time(user, "last_login_time", self.last_login_time, config)
        };

        let last_ip = self
            .last_ip_addr()
            .map_or_else(|| NONE.to_string(), |ip| ip.to_string());

        let banned = if self.is_banned_at(now) {
            format!(
                "yes, until {}",
                render_time(user, "unban_time", self.unban_time, config)
            )
        } else {
            "no".to_string()
        };

        let expired = if self.expiration_time == 0 {
            "never".to_string()
        } else if self.is_expired_at(now) {
            format!(
                "yes, since {}",
                render_time(user, "expiration_time", self.expiration_time, config)
            )
        } else {
            "no".to_string()
        };

        let mut text = String::with_capacity(256);
        // Writing into a String cannot fail
        let _ = write!(
            text,
            "User ID: {user}\n\
             Email: {email}\n\
             Birthdate: {birthdate}\n\
             Login Count: {login_count}\n\
             Login Fail Count: {login_fail_count}\n\
             Last Login Time: {last_login}\n\
             Last IP: {last_ip}\n\
             Banned: {banned}\n\
             Expired: {expired}\n",
            email = or_placeholder(&self.email, NONE),
            birthdate = or_placeholder(&self.birthdate, NONE),
            login_count = self.login_count,
            login_fail_count = self.login_fail_count,
        );
        text
    }
}

/// Format a timestamp field, degrading to [`INVALID`] with a warning.
fn render_time(user: &str, field: &'static str, ts: i64, config: &SummaryConfig) -> String {
    clock::format_timestamp(ts, &config.time_format).unwrap_or_else(|| {
        warn!(user = %user, field, value = ts, "Failed to format timestamp");
        INVALID.to_string()
    })
}

/// Write `acc`'s summary to `out` using the default config.
///
/// Returns `false` when there is no account or the write fails.
pub fn print_summary<W: Write + ?Sized>(acc: Option<&Account>, out: &mut W) -> bool {
    print_summary_with(acc, out, &SummaryConfig::default())
}

/// Write `acc`'s summary to `out`, returning whether it was written.
pub fn print_summary_with<W: Write + ?Sized>(
    acc: Option<&Account>,
    out: &mut W,
    config: &SummaryConfig,
) -> bool {
    let Some(acc) = acc else {
        trace!("Summary requested for absent account");
        return false;
    };

    match acc.write_summary_with(out, config) {
        Ok(()) => true,
        Err(e) => {
            error!(
                user = %or_placeholder(&acc.username, UNKNOWN),
                code = e.error_code(),
                error = %e,
                "Failed to write summary"
            );
            false
        }
    }
}
