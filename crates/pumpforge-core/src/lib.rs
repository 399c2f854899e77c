//! Generation pipeline and collaborator ports for pumpforge.
//!
//! This crate defines the traits (completion client, credentials, image
//! generator, contract and branding generators, deployer) that the
//! infrastructure layer implements, plus the pure prompt/assembly logic and
//! the `TokenPipeline` that sequences them.
//! It depends only on `pumpforge-types` -- never on `pumpforge-infra` or any
//! HTTP or filesystem crate.

pub mod asset;
pub mod credentials;
pub mod deploy;
pub mod llm;
pub mod pipeline;
pub mod project;
pub mod token;
