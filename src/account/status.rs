//! Ban and expiration timestamps.
//!
//! Both use `0` as "not applicable". A ban holds while `unban_time` is
//! strictly in the future; an account is expired once a nonzero
//! `expiration_time` is strictly in the past.

use super::Account;
use crate::clock;
use tracing::info;

impl Account {
    /// Whether the account is banned right now.
    pub fn is_banned(&self) -> bool {
        self.is_banned_at(clock::unix_now())
    }

    /// Whether the account is banned at unix time `now`.
    #[inline]
    pub fn is_banned_at(&self, now: i64) -> bool {
        self.unban_time != 0 && self.unban_time > now
    }

    /// Whether the account has expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(clock::unix_now())
    }

    /// Whether the account has expired at unix time `now`.
    #[inline]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiration_time != 0 && self.expiration_time < now
    }

    /// Ban for `secs` seconds from now. `0` lifts the ban immediately.
    pub fn set_unban_time(&mut self, secs: u64) {
        self.unban_time = clock::deadline_after(secs);
        info!(
            user = %self.username,
            duration = secs,
            unban_time = self.unban_time,
            "Ban updated"
        );
    }

    /// Expire `secs` seconds from now. `0` expires the account immediately.
    pub fn set_expiration_time(&mut self, secs: u64) {
        self.expiration_time = clock::deadline_after(secs);
        info!(
            user = %self.username,
            expiration_time = self.expiration_time,
            "Expiration time changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banned_cases() {
        let now = clock::unix_now();
        let mut acc = Account::default();

        acc.unban_time = 0;
        assert!(!acc.is_banned());

        acc.unban_time = now + 3600;
        assert!(acc.is_banned());

        acc.unban_time = now - 3600;
        assert!(!acc.is_banned());
    }

    #[test]
    fn banned_boundary_is_not_banned() {
        let acc = Account {
            unban_time: 1_000,
            ..Account::default()
        };
        assert!(!acc.is_banned_at(1_000));
        assert!(acc.is_banned_at(999));
    }

    #[test]
    fn expired_cases() {
        let now = clock::unix_now();
        let mut acc = Account::default();

        acc.expiration_time = 0;
        assert!(!acc.is_expired());

        acc.expiration_time = now + 3600;
        assert!(!acc.is_expired());

        acc.expiration_time = now - 3600;
        assert!(acc.is_expired());
    }

    #[test]
    fn expired_boundary_is_not_expired() {
        let acc = Account {
            expiration_time: 1_000,
            ..Account::default()
        };
        assert!(!acc.is_expired_at(1_000));
        assert!(acc.is_expired_at(1_001));
    }

    #[test]
    fn set_unban_time_offsets_from_now() {
        let mut acc = Account::default();
        for secs in [3600u64, 0, 86400] {
            let now = clock::unix_now();
            acc.set_unban_time(secs);
            assert!((acc.unban_time - now - secs as i64).abs() <= 1);
        }
    }

    #[test]
    fn zero_unban_is_not_banned() {
        let mut acc = Account::default();
        acc.set_unban_time(3600);
        assert!(acc.is_banned());
        acc.set_unban_time(0);
        assert!(!acc.is_banned());
    }

    #[test]
    fn set_expiration_time_offsets_from_now() {
        let mut acc = Account::default();
        for secs in [3600u64, 0, 2_592_000] {
            let now = clock::unix_now();
            acc.set_expiration_time(secs);
            assert!((acc.expiration_time - now - secs as i64).abs() <= 1);
        }
    }

    #[test]
    fn huge_duration_saturates() {
        let mut acc = Account::default();
        acc.set_unban_time(u64::MAX);
        assert_eq!(acc.unban_time, i64::MAX);
        assert!(acc.is_banned());
    }
}
