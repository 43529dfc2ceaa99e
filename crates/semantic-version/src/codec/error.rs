//! Errors raised while decoding structured versions

use thiserror::Error;

use super::path::CodingPath;

/// Error type for structured decoding
#[derive(Error, Debug)]
pub enum CodingError {
    /// A string member that does not parse as a version
    #[error("Malformed data at {path}: {message}")]
    Malformed { path: CodingPath, message: String },

    /// A required member of the object representation is absent
    #[error("Missing field \"{field}\" at {path}")]
    MissingField { field: String, path: CodingPath },

    #[error("Expected {expected} at {path}")]
    InvalidType { path: CodingPath, expected: &'static str },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodingError {
    /// Where in the document the error occurred, if known
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            CodingError::Malformed { path, .. }
            | CodingError::MissingField { path, .. }
            | CodingError::InvalidType { path, .. } => Some(path),
            CodingError::Json(_) => None,
        }
    }
}
