//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A token or alias source file is missing.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A source file exists but its format could not be determined.
    #[error("cannot determine source format of {path}")]
    UnsupportedSourceFormat { path: PathBuf },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the path, or run `toksmith init` to create a starter source".into(),
            ],
            Self::UnsupportedSourceFormat { path } => vec![
                format!("Could not pick a parser for: {}", path.display()),
                "Token documents use a .json extension; anything else is read as definitions text"
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedSourceFormat { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
