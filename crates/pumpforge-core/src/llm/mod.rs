//! Completion client abstractions.
//!
//! - `CompletionClient`: RPITIT trait for concrete provider clients
//! - `BoxCompletionClient`: object-safe wrapper for runtime selection

pub mod box_client;
pub mod client;
