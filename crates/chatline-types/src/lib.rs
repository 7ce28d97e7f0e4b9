//! Shared domain types for Chatline.
//!
//! This crate contains the core domain types used across the Chatline
//! workspace: messages, responder replies, configuration, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod responder;
