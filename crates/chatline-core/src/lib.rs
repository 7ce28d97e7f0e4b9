//! Widget logic and port definitions for Chatline.
//!
//! This crate defines the "ports" (the [`store::LogStore`],
//! [`responder::Responder`], and [`view::ThreadView`] traits) that the
//! infrastructure and CLI layers implement, plus the pure conversation state
//! ([`log::ConversationLog`]) and the orchestration around it
//! ([`widget::ChatWidget`]). It depends only on `chatline-types` -- never on
//! `chatline-infra` or any terminal/network crate.

pub mod log;
pub mod responder;
pub mod store;
pub mod view;
pub mod widget;
