//! Responder service trait.
//!
//! Defines the interface for the remote collaborator that produces bot
//! replies. The HTTP implementation lives in chatline-infra.

use chatline_types::error::ResponderError;
use chatline_types::responder::BotReply;

/// Trait for the remote responder exchange.
///
/// One call per user submission, carrying every message text so far in
/// insertion order (newest last). The exchange has no timeout or
/// cancellation of its own: it resolves, rejects, or runs until the host
/// terminates it.
pub trait Responder: Send + Sync {
    fn respond(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<BotReply, ResponderError>> + Send;
}
