//! Token concept generation: prompt construction and result assembly.

pub mod assembler;
pub mod prompt;
