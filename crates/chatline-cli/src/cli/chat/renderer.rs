//! Terminal rendering of message bubbles.
//!
//! One printed block per message: sender label, text, and a dim local time
//! label. Intro-variant bot bubbles carry the configured intro line above
//! the text, dim and italic.

use chatline_types::message::{Message, Sender};
use chrono::{DateTime, Local, Utc};
use console::style;

/// Prints message bubbles to the terminal.
pub struct ThreadRenderer {
    bot_name: String,
    intro_line: String,
}

impl ThreadRenderer {
    pub fn new(bot_name: String, intro_line: String) -> Self {
        Self {
            bot_name,
            intro_line,
        }
    }

    /// Print one message bubble.
    pub fn print_bubble(&self, message: &Message, with_intro: bool) {
        if message.sender == Sender::Bot && with_intro {
            println!("  {}", style(&self.intro_line).dim().italic());
        }

        let label = match message.sender {
            Sender::User => style("You").green().bold(),
            Sender::Bot => style(self.bot_name.as_str()).cyan().bold(),
        };
        println!("  {} {}", label, message.text);
        println!("  {}", style(time_label(&message.time)).dim());
    }
}

/// Local wall-clock label for a message, hour and minute only.
pub fn time_label(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}
