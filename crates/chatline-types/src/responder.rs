//! Responder service reply types.
//!
//! The responder is the external HTTP collaborator that produces bot replies
//! and an interest signal. These types model its reply at the domain level;
//! the wire shapes live in `chatline-infra`.

use serde::{Deserialize, Serialize};

/// Outcome of a successful exchange with the responder service.
///
/// `reply` being absent means "no answer available" -- the widget renders a
/// fixed fallback message for it. It is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotReply {
    pub reply: Option<String>,
    /// Signal that the conversation merits follow-up.
    #[serde(default)]
    pub high_interest: bool,
}
