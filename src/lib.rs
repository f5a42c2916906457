//! slirc-account - account records for Straylight services.
//!
//! An [`Account`] tracks one user's identity fields, login streaks, ban and
//! expiration timestamps, and can print a human-readable summary of itself.

pub mod account;
pub mod clock;
pub mod config;
pub mod error;

pub use account::{Account, print_summary, print_summary_with};
pub use config::{Config, ConfigError, LimitsConfig, SummaryConfig};
pub use error::{AccountError, SummaryError};
