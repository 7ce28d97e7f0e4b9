//! In-memory conversation log.
//!
//! [`ConversationLog`] is the ordered message history for one session. It is
//! pure state: serialization to and from the persisted blob lives here, but
//! nothing in this module touches storage or the terminal.

use chatline_types::message::Message;
use tracing::warn;

/// Ordered sequence of messages; insertion order is the only ordering.
///
/// Owned exclusively by one `ChatWidget`. Uniqueness is not enforced.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted blob into a log.
    ///
    /// A blob that is not a valid JSON array of messages yields an empty log
    /// with a warning, never an error. This preserves the behavior of the
    /// original storage format, where corrupt state silently resets.
    pub fn from_blob(blob: &str) -> Self {
        match serde_json::from_str::<Vec<Message>>(blob) {
            Ok(messages) => Self { messages },
            Err(err) => {
                warn!(error = %err, "persisted log is malformed, starting empty");
                Self::new()
            }
        }
    }

    /// Serialize the full log for persistence (overwrite semantics).
    pub fn to_blob(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.messages)
    }

    /// Append a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All message texts in insertion order.
    ///
    /// This is exactly the payload sent to the responder service.
    pub fn texts(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.text.clone()).collect()
    }
}
