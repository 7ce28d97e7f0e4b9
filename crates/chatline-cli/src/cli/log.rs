//! `history` and `clear` commands operating on the persisted log.
//!
//! These work directly against the file store, outside the chat loop.

use chatline_core::log::ConversationLog;
use chatline_core::store::LogStore;
use chatline_infra::store::FileLogStore;
use chatline_types::message::Sender;
use chrono::Local;
use console::style;

use crate::state::AppState;

/// Print the persisted conversation history.
pub async fn show_history(state: &AppState, json: bool) -> anyhow::Result<()> {
    let store = FileLogStore::in_data_dir(&state.data_dir);
    let log = match store.get().await? {
        Some(blob) => ConversationLog::from_blob(&blob),
        None => ConversationLog::new(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(log.messages())?);
        return Ok(());
    }

    if log.is_empty() {
        println!();
        println!("  {}", style("No conversation history.").dim());
        println!();
        return Ok(());
    }

    println!();
    for msg in log.messages() {
        let label = match msg.sender {
            Sender::User => style("You").green().bold(),
            Sender::Bot => style(state.config.bot_name.as_str()).cyan().bold(),
        };
        let time = msg.time.with_timezone(&Local).format("%H:%M");
        println!("  {} {}  {}", style(time).dim(), label, msg.text);
    }
    println!();
    Ok(())
}

/// Delete the persisted conversation history.
pub async fn clear_log(state: &AppState, json: bool) -> anyhow::Result<()> {
    let store = FileLogStore::in_data_dir(&state.data_dir);
    store.remove().await?;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        println!();
        println!("  {} Conversation history cleared.", style("*").cyan().bold());
        println!();
    }
    Ok(())
}
