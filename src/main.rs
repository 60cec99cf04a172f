//! Contact Assistant - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::{run_session, Assistant, Config, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep stdout for the conversation)
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        year_wrap = ?config.year_wrap,
        leap_day = ?config.leap_day_policy,
        "Starting contact assistant"
    );

    let mut assistant = Assistant::new(SystemClock, config.upcoming_options());
    let stdin = io::stdin();
    run_session(&mut assistant, stdin.lock(), io::stdout())?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
