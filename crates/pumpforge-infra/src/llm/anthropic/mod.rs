//! Anthropic Claude completion client.

pub mod client;
pub mod types;

pub use client::AnthropicClient;
