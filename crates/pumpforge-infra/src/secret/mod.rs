//! Credential provider implementations.
//!
//! - `env`: environment variable provider

pub mod env;
