//! Chatline CLI entry point.
//!
//! Binary name: `chatline`
//!
//! Parses CLI arguments, initializes the data directory and config, then
//! dispatches to the chat loop or one of the log commands.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,chatline=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "chatline", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat { url } => {
            cli::chat::loop_runner::run_chat_loop(&state, url).await?;
        }
        Commands::History => {
            cli::log::show_history(&state, cli.json).await?;
        }
        Commands::Clear => {
            cli::log::clear_log(&state, cli.json).await?;
        }
        Commands::Completions { .. } => {
            // Handled above.
        }
    }

    Ok(())
}
