//! All error types for the langmig crate.
//!
//! These are returned from all fallible operations (scanning, artifact
//! serialization, substitution compilation, file rewriting).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("artifact error: {0}")]
    Artifact(String),
}

impl Error {
    /// Creates a new artifact error, used when the persisted scan report
    /// is missing or malformed.
    pub fn artifact_error(message: impl Into<String>) -> Self {
        Error::Artifact(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_pattern_error() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let error = Error::Pattern(regex_error);
        assert!(error.to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_artifact_error() {
        let error = Error::artifact_error("scan report not found");
        assert_eq!(error.to_string(), "artifact error: scan report not found");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::artifact_error("test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("Artifact"));
        assert!(debug.contains("test"));
    }
}
