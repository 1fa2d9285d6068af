//! meeting-prep - AI-assisted meeting preparation briefs
//!
//! Entry point for the meeting-prep server and CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meeting_prep::cli::{Cli, Commands};
use meeting_prep::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        meeting_prep::cli::completions::print(shell);
        return Ok(());
    }

    // Credentials may live in a local .env file
    let _ = dotenvy::dotenv();
    let settings = Settings::load()?;

    // Initialize logging
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        settings.general.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli.command {
        Commands::Serve { host, port } => {
            meeting_prep::cli::commands::serve(settings, host, port).await?;
        }
        Commands::Prepare(args) => {
            meeting_prep::cli::commands::prepare_meeting(&settings, args).await?;
        }
        Commands::Doctor { json } => {
            meeting_prep::cli::commands::run_doctor(&settings, json).await?;
        }
        Commands::Config(config_cmd) => {
            meeting_prep::cli::commands::config_command(&settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
