//! slirc-account - demo driver for the account record.
//!
//! Usage: `slirc-account [config.toml]`. Without a path the built-in
//! defaults are used.

use slirc_account::{Account, Config, config};
use std::net::Ipv4Addr;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path, code = e.error_code(), error = %e, "Failed to load config");
            e
        })?,
        None => Config::default(),
    };

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    let mut acc = Account::create_with_limits(
        &config.limits,
        "bob",
        "securepassword",
        "test@example.com",
        "2000-01-01",
    )?;
    info!(user = %acc.username, "Demo account created");

    acc.record_login_success(Ipv4Addr::LOCALHOST);
    acc.record_login_failure();

    if acc.exceeds_failure_limit(config.limits.max_login_failures) {
        warn!(user = %acc.username, "Too many failed logins");
    }

    acc.set_unban_time(3600);
    acc.set_expiration_time(30 * 24 * 3600);

    let stdout = std::io::stdout();
    acc.write_summary_with(&mut stdout.lock(), &config.summary)?;

    acc.free();
    Ok(())
}
