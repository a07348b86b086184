//! objctl - Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use objctl::cli::Cli;
use objctl::commands::dispatch;
use objctl::logs::{init_logging, LogOptions};
use objctl::storage::layout;
use objctl::storage::settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_file = layout::config_file(cli.config.clone());
    let settings = Settings::load(&config_file).await;

    let log_options = LogOptions {
        log_level: cli.log_level(settings.as_ref().ok().and_then(|s| s.log_level)),
        json_format: cli.log_json,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match dispatch(&cli.command, settings, &config_file, cli.context.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
