//! Wall-clock helpers shared by the account record.
//!
//! Timestamps are signed unix seconds, matching what chrono hands back from
//! `Utc::now().timestamp()`.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Current unix time in seconds.
#[inline]
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Timestamp `secs` seconds from now, saturating at `i64::MAX`.
pub fn deadline_after(secs: u64) -> i64 {
    let secs = i64::try_from(secs).unwrap_or(i64::MAX);
    unix_now().saturating_add(secs)
}

/// Convert unix seconds to a UTC datetime.
///
/// Returns `None` when chrono cannot represent the value.
pub fn to_datetime(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

/// Format unix seconds with a `strftime` pattern.
///
/// Returns `None` for unrepresentable timestamps and for patterns chrono
/// rejects, instead of panicking inside `Display`.
pub fn format_timestamp(ts: i64, pattern: &str) -> Option<String> {
    let dt = to_datetime(ts)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}
