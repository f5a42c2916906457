//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Limits Defaults
// =============================================================================

/// Exclusive upper bound on username length, in bytes.
pub fn default_max_username_len() -> usize {
    32
}

/// Exclusive upper bound on email length, in bytes.
pub fn default_max_email_len() -> usize {
    100
}

pub fn default_max_login_failures() -> u32 {
    10
}

// =============================================================================
// Summary Defaults
// =============================================================================

pub fn default_time_format() -> String {
    "%Y-%m-%d %H:%M:%S UTC".to_string()
}
