//! thp-core: shared errors and configuration.
//!
//! This crate is the foundational dependency for the other thpforge
//! crates, providing a unified error type and the application
//! configuration.

pub mod config;
pub mod error;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
