#![forbid(unsafe_code)]

mod callout;
mod cli;
mod config;
mod constants;
mod gui;
mod host;
mod presentation;
mod store;
mod vault;

use anyhow::Result;
use clap::Parser;
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Command};
use config::AppConfig;

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before logging is up so its level can be honored
    let (mut config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // LOG_LEVEL wins over the configured level
    let log_level = parse_level(
        &std::env::var("LOG_LEVEL").unwrap_or_else(|_| config.log_level.clone()),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(err) = config_error {
        warn!(error = ?err, "Failed to load config, using defaults");
    }

    cli.apply_overrides(&mut config);
    info!(vault = ?config.vault, "starting calloutx");

    match cli.command {
        None | Some(Command::Gui) => gui::run_gui(config),
        Some(command) => cli::run(command, &config),
    }
}
