//! Client configuration.
//!
//! Loaded from `{data_dir}/config.toml` by `chatline-infra`; every field is
//! optional in the file and falls back to the defaults below.

use serde::{Deserialize, Serialize};

/// Default responder service base URL.
pub const DEFAULT_RESPONDER_URL: &str = "http://127.0.0.1:8000";

/// Chat client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the responder service.
    pub responder_url: String,
    /// Display name for bot bubbles.
    pub bot_name: String,
    /// Line rendered above intro-variant bot bubbles.
    pub intro_line: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            responder_url: DEFAULT_RESPONDER_URL.to_string(),
            bot_name: "Vicky".to_string(),
            intro_line: "This is Vicky from Issa".to_string(),
        }
    }
}
