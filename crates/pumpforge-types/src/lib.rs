//! Shared domain types for pumpforge.
//!
//! This crate contains the types passed between the generation pipeline and
//! its collaborators: completion requests and results, token metadata,
//! tokenomics, contract and branding artifacts, deployment results,
//! configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod deploy;
pub mod error;
pub mod llm;
pub mod project;
pub mod token;
