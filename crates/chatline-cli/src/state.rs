//! Application state for the CLI.
//!
//! Resolves the data directory, ensures it exists, and loads the config.
//! Adapter instances (store, responder, view) are wired per command.

use std::path::PathBuf;

use chatline_infra::config::{load_config, resolve_data_dir};
use chatline_types::config::ChatConfig;

/// Shared state for CLI commands.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: ChatConfig,
}

impl AppState {
    /// Initialize: resolve and create the data directory, load config.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        Ok(Self { data_dir, config })
    }
}
