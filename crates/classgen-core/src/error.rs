//! Centralized error types for classgen.

use thiserror::Error;

/// Main error type for classgen operations.
#[derive(Error, Debug)]
pub enum ClassgenError {
    #[error("Class hierarchy not found: {0}")]
    HierarchyNotFound(String),

    #[error("Malformed {directive} directive at {file}:{line}: missing (ClassName)")]
    MalformedDirective {
        file: String,
        line: usize,
        directive: String,
    },

    #[error("No output file paired with template '{0}'")]
    MissingOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for classgen operations.
pub type ClassgenResult<T> = Result<T, ClassgenError>;

impl ClassgenError {
    /// Create a malformed directive error.
    pub fn malformed(file: impl Into<String>, line: usize, directive: impl Into<String>) -> Self {
        Self::MalformedDirective {
            file: file.into(),
            line,
            directive: directive.into(),
        }
    }
}
