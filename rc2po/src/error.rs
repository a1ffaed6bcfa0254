//! All error types for the rc2po crate.
//!
//! Only hard failures live here. Recoverable conditions (identifier
//! mismatches, conflicting duplicates) are logged and reported as data by the
//! aligner and the `.po` writer instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reference language `{0}` not found in the input directory")]
    MissingReference(String),

    #[error("duplicate locale `{code}`: {} and {}", .first.display(), .second.display())]
    DuplicateLocale {
        code: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// Creates a new missing reference error
    pub fn missing_reference(code: impl Into<String>) -> Self {
        Error::MissingReference(code.into())
    }

    /// Creates a new invalid path error
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Error::InvalidPath(message.into())
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
    fn test_missing_reference_error() {
        let error = Error::missing_reference("en-US");
        assert_eq!(
            error.to_string(),
            "reference language `en-US` not found in the input directory"
        );
    }

    #[test]
    fn test_duplicate_locale_error() {
        let error = Error::DuplicateLocale {
            code: "de-DE".to_string(),
            first: PathBuf::from("in/de-DE.rc"),
            second: PathBuf::from("in/DE-de.rc"),
        };
        let display = error.to_string();
        assert!(display.starts_with("duplicate locale `de-DE`"));
        assert!(display.contains("in/DE-de.rc"));
    }

    #[test]
    fn test_invalid_path_error() {
        let error = Error::invalid_path("not a directory: /nope");
        assert_eq!(error.to_string(), "invalid path: not a directory: /nope");
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::missing_reference("en-US");
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingReference"));
        assert!(debug.contains("en-US"));
    }
}
