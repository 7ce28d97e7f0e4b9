//! Async line input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop can await submissions while
//! the typing spinner animates, and maps EOF (Ctrl+D) and interrupt (Ctrl+C)
//! to explicit events instead of errors.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Intents delivered by the input control.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (already trimmed).
    Submit(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// The text input control of the chat session.
pub struct ChatInput {
    rl: Readline,
    prompt: String,
}

impl ChatInput {
    /// Create the input control with its prompt.
    ///
    /// The returned `SharedWriter` can print without corrupting the prompt
    /// line; the chat loop keeps it alive for the session.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt.clone())?;
        Ok((Self { rl, prompt }, writer))
    }

    /// Await the next submit/exit intent.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                InputEvent::Submit(line.trim().to_string())
            }
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Restore the prompt after output that may have displaced it.
    pub fn refresh_prompt(&mut self) {
        let _ = self.rl.update_prompt(&self.prompt);
    }

    /// Clear the terminal screen.
    pub fn clear_screen(&mut self) {
        let _ = self.rl.clear();
    }
}
