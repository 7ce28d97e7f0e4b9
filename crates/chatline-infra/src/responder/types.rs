//! Wire types for the responder service protocol.
//!
//! Request: `POST /respond` with `{"messages": ["...", ...]}` -- every
//! message text so far in insertion order, newest last.
//! Response: `{"reply"?: string, "high_interest"?: bool}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct RespondRequest {
    pub messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RespondResponse {
    pub reply: Option<String>,
    #[serde(default)]
    pub high_interest: bool,
}
