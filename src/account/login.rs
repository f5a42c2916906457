//! Login outcome tracking.
//!
//! `login_count` and `login_fail_count` are mutually resetting streaks: a
//! success clears the failure streak and vice versa.

use super::Account;
use crate::clock;
use std::net::Ipv4Addr;
use tracing::{info, warn};

impl Account {
    /// Record a successful login from `ip`.
    pub fn record_login_success(&mut self, ip: impl Into<Ipv4Addr>) {
        let ip = ip.into();

        self.login_count = self.login_count.saturating_add(1);
        self.login_fail_count = 0;
        self.last_login_time = clock::unix_now();
        self.last_ip = u32::from(ip);

        info!(user = %self.username, ip = %ip, count = self.login_count, "Login success");
    }

    /// Record a failed login. Last login time and address are left alone.
    pub fn record_login_failure(&mut self) {
        self.login_fail_count = self.login_fail_count.saturating_add(1);
        self.login_count = 0;

        warn!(user = %self.username, fail_count = self.login_fail_count, "Login failure");
    }

    /// True once consecutive failures exceed `limit`.
    #[inline]
    pub fn exceeds_failure_limit(&self, limit: u32) -> bool {
        self.login_fail_count > limit
    }
}
