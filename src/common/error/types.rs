//! Unified error types for testament generation.
use thiserror::Error;

/// Main error type for document generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Will data violates a precondition of the generator
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    XmlError(String),

    /// The assembled package is empty or malformed
    #[error("Document generation failed: {message}")]
    Generation {
        message: String,
        #[source]
        source: stored_zip::Error,
    },

    /// A will description could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
