//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, LimitsConfig, SummaryConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup validation of loaded values

mod defaults;
mod types;
mod validation;

pub use types::{Config, ConfigError, LimitsConfig, SummaryConfig};
pub use validation::{ValidationError, validate};
