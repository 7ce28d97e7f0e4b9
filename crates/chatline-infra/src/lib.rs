//! Infrastructure layer for Chatline.
//!
//! Contains implementations of the ports defined in `chatline-core`:
//! file-based log storage, the HTTP responder client, plus config loading
//! and data-directory resolution.

pub mod config;
pub mod responder;
pub mod store;
