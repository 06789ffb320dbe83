//! Common types and utilities shared by the document and package layers.

// Submodule declarations
pub mod error;
pub mod numeral;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
