//! Account record: creation, login streaks, ban/expiry and summaries.
//!
//! [`Account`] is a plain data struct; its operations live on inherent
//! methods split across submodules. The free functions here mirror those
//! methods for callers holding an optional record: an absent record is
//! silently ignored.

mod login;
mod model;
mod status;
mod summary;
pub mod validation;

pub use model::Account;
pub use summary::{INVALID, NEVER, NONE, UNKNOWN, or_placeholder, print_summary, print_summary_with};

use crate::error::AccountError;
use std::net::Ipv4Addr;
use tracing::trace;

/// Create an account with the default limits. See [`Account::create`].
pub fn create(
    username: &str,
    credential: &str,
    email: &str,
    birthdate: &str,
) -> Result<Account, AccountError> {
    Account::create(username, credential, email, birthdate)
}

/// Release an account, if any.
pub fn free(acc: Option<Account>) {
    if let Some(acc) = acc {
        acc.free();
    }
}

/// Record a successful login. No-op when `acc` is `None`.
pub fn record_login_success(acc: Option<&mut Account>, ip: impl Into<Ipv4Addr>) {
    let Some(acc) = acc else {
        trace!("Login success on absent account ignored");
        return;
    };
    acc.record_login_success(ip);
}

/// Record a failed login. No-op when `acc` is `None`.
pub fn record_login_failure(acc: Option<&mut Account>) {
    let Some(acc) = acc else {
        trace!("Login failure on absent account ignored");
        return;
    };
    acc.record_login_failure();
}

#[inline]
pub fn is_banned(acc: &Account) -> bool {
    acc.is_banned()
}

#[inline]
pub fn is_expired(acc: &Account) -> bool {
    acc.is_expired()
}

/// Ban for `secs` seconds from now. No-op when `acc` is `None`.
pub fn set_unban_time(acc: Option<&mut Account>, secs: u64) {
    let Some(acc) = acc else {
        trace!("Unban time on absent account ignored");
        return;
    };
    acc.set_unban_time(secs);
}

/// Expire `secs` seconds from now. No-op when `acc` is `None`.
pub fn set_expiration_time(acc: Option<&mut Account>, secs: u64) {
    let Some(acc) = acc else {
        trace!("Expiration time on absent account ignored");
        return;
    };
    acc.set_expiration_time(secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_record_mutators_are_noops() {
        record_login_success(None, 0x7f00_0001u32);
        record_login_failure(None);
        set_unban_time(None, 3600);
        set_expiration_time(None, 3600);
        free(None);
    }

    #[test]
    fn present_record_is_forwarded() {
        let mut acc = create("user1", "abc123", "a@example.com", "2000-01-01").unwrap();

        record_login_success(Some(&mut acc), 0x7f00_0001u32);
        assert_eq!(acc.login_count, 1);
        assert_eq!(acc.last_ip, 0x7f00_0001);

        record_login_failure(Some(&mut acc));
        assert_eq!(acc.login_fail_count, 1);
        assert_eq!(acc.login_count, 0);

        set_unban_time(Some(&mut acc), 3600);
        assert!(is_banned(&acc));

        set_expiration_time(Some(&mut acc), 3600);
        assert!(!is_expired(&acc));

        free(Some(acc));
    }
}
