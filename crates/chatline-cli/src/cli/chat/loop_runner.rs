//! Main chat loop orchestration.
//!
//! Wires the widget to its concrete adapters (file store, HTTP responder,
//! terminal view), replays persisted history, then runs the read-line loop
//! dispatching slash commands and submissions.

use console::style;
use tracing::info;

use chatline_core::widget::ChatWidget;
use chatline_infra::responder::HttpResponder;
use chatline_infra::store::FileLogStore;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ThreadRenderer;
use super::view::TerminalThreadView;

/// Run the interactive chat session.
pub async fn run_chat_loop(state: &AppState, url_override: Option<String>) -> anyhow::Result<()> {
    let responder_url = url_override.unwrap_or_else(|| state.config.responder_url.clone());

    let store = FileLogStore::in_data_dir(&state.data_dir);
    let log_path = store.path().to_path_buf();
    let responder = HttpResponder::new(&responder_url);
    let view = TerminalThreadView::new(ThreadRenderer::new(
        state.config.bot_name.clone(),
        state.config.intro_line.clone(),
    ));
    let mut widget = ChatWidget::new(store, responder, view);

    print_welcome_banner(&state.config.bot_name, &responder_url, &log_path);

    widget.load_messages().await?;
    info!(count = widget.log().len(), "replayed persisted conversation");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Submit(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                        }
                        ChatCommand::Clear => {
                            widget.clear().await?;
                            input.clear_screen();
                            println!("\n  {}\n", style("Conversation cleared.").dim());
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                widget.submit(&text).await?;
                input.refresh_prompt();
            }
        }
    }

    Ok(())
}
