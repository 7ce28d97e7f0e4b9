//! Welcome banner display for chat sessions.

use std::path::Path;

use console::style;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the bot's name, the responder endpoint, where the conversation is
/// persisted, and a hint about slash commands.
pub fn print_welcome_banner(bot_name: &str, responder_url: &str, log_path: &Path) {
    println!();
    println!("  {}", style(bot_name).cyan().bold());
    println!();
    println!(
        "  {}  {}",
        style("Responder:").bold(),
        style(responder_url).dim()
    );
    println!(
        "  {}  {}",
        style("Log:").bold(),
        style(log_path.display()).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
