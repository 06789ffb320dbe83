//! Unified error types for testament generation.
//!
//! This module provides a single error type covering input validation, XML
//! serialization and archive assembly, presenting a consistent API to callers.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
