//! Interactive chat session for Chatline.
//!
//! This module implements the full chat loop: persisted-history replay,
//! typing spinner during exchanges, welcome banner, and slash commands.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
pub mod view;
