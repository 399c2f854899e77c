//! Infrastructure layer for pumpforge.
//!
//! Implements the ports defined in `pumpforge-core`: OpenAI and Anthropic
//! completion clients over reqwest, environment credentials, PNG output, the
//! contract, branding and deployment stand-ins, and the TOML configuration
//! loader.

pub mod asset;
pub mod config;
pub mod deploy;
pub mod llm;
pub mod project;
pub mod secret;
