//! Error conversion implementations.
//!
//! This module contains From trait implementations and constructors that map
//! lower-level failures onto the unified Error type.
use super::types::Error;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl Error {
    /// Wrap an archive failure with a description of the generation step.
    pub(crate) fn generation(message: impl Into<String>, source: stored_zip::Error) -> Self {
        Error::Generation {
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_generation_keeps_cause() {
        let cause = stored_zip::Error::from(stored_zip::ErrorKind::EmptyArchive);
        let err = Error::generation("archive buffer is empty", cause);

        assert_eq!(
            err.to_string(),
            "Document generation failed: archive buffer is empty"
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("archive has no members"));
    }
}
