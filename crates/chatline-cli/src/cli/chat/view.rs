//! Terminal implementation of the [`ThreadView`] port.
//!
//! Bubbles print through [`ThreadRenderer`]; the typing placeholder is an
//! indicatif spinner. The terminal scrolls on its own and the read-line loop
//! awaits each exchange before accepting the next submission, so
//! `scroll_to_end`, `set_input_enabled`, and `focus_input` need no drawing
//! of their own here.

use std::io::Write;
use std::time::Duration;

use chatline_core::view::ThreadView;
use chatline_types::message::Message;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use super::renderer::ThreadRenderer;

/// Renders the conversation thread to the terminal.
pub struct TerminalThreadView {
    renderer: ThreadRenderer,
    typing: Option<ProgressBar>,
}

impl TerminalThreadView {
    pub fn new(renderer: ThreadRenderer) -> Self {
        Self {
            renderer,
            typing: None,
        }
    }
}

impl ThreadView for TerminalThreadView {
    fn append_bubble(&mut self, message: &Message, with_intro: bool) {
        self.renderer.print_bubble(message, with_intro);
    }

    fn show_typing(&mut self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("typing...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.typing = Some(spinner);
    }

    fn hide_typing(&mut self) {
        if let Some(spinner) = self.typing.take() {
            spinner.finish_and_clear();
        }
    }

    fn scroll_to_end(&mut self) {
        let _ = std::io::stdout().flush();
    }

    fn clear_thread(&mut self) {
        let _ = Term::stdout().clear_screen();
    }

    fn set_input_enabled(&mut self, _enabled: bool) {
        // The loop awaits each exchange before reading the next line, so a
        // second submission cannot happen while one is in flight.
    }

    fn focus_input(&mut self) {
        // Focus never leaves the terminal input.
    }
}
