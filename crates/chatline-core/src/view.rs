//! Thread view trait.
//!
//! The widget drives rendering through this minimal render-command
//! interface; the terminal implementation lives in chatline-cli. Keeping the
//! surface this small is what makes the widget testable without a terminal.

use chatline_types::message::Message;

/// Render-command interface for the conversation thread.
///
/// Commands are synchronous and infallible from the widget's perspective:
/// a view that cannot draw simply drops the command. Time labels are the
/// view's concern; the widget passes the full message.
pub trait ThreadView {
    /// Render one message bubble at the end of the thread.
    ///
    /// `with_intro` marks the intro render variant used for bot replies
    /// (an intro line above the bubble text).
    fn append_bubble(&mut self, message: &Message, with_intro: bool);

    /// Show the transient "typing" placeholder.
    fn show_typing(&mut self);

    /// Remove the "typing" placeholder.
    fn hide_typing(&mut self);

    /// Keep the newest content visible.
    fn scroll_to_end(&mut self);

    /// Remove every rendered bubble.
    fn clear_thread(&mut self);

    /// Enable or disable the input controls.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Move focus back to the input control.
    fn focus_input(&mut self);
}
