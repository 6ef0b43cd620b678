//! Error types for pattern compilation and project loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building dialects or loading a project.
///
/// "Nothing matched" and "no symbol under the cursor" are not errors; those
/// are reported as empty results.
#[derive(Debug, Error)]
pub enum NavError {
    /// A pattern failed to compile.
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// IO error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while walking a scan directory.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The project root does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No dialect is registered under this name.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

impl NavError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: fancy_regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Create an unknown dialect error.
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect(name.into())
    }
}
