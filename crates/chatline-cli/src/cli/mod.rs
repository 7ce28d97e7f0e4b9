//! CLI command definitions and dispatch for the `chatline` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod log;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with a remote responder service from your terminal.
#[derive(Parser)]
#[command(name = "chatline", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Responder service base URL (overrides config.toml).
        #[arg(long, env = "CHATLINE_RESPONDER_URL")]
        url: Option<String>,
    },

    /// Print the persisted conversation history.
    History,

    /// Delete the persisted conversation history.
    Clear,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
