//! HTTP responder service client.

mod client;
mod types;

pub use client::HttpResponder;
