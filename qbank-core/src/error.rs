//! Structured error types for qbank-core.
//!
//! Library callers get typed errors via `thiserror`; the CLI wraps them in
//! `anyhow` for reporting.

use thiserror::Error;

use crate::models::ValidationError;
use crate::storage::StorageError;

/// Errors returned by [`crate::QuestionStore`] operations
#[derive(Error, Debug)]
pub enum QbankError {
    /// Question text or answer is blank; raised before any storage access
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A stored question already uses this exact text
    #[error("duplicate question: '{text}' already exists")]
    DuplicateQuestion { text: String },

    /// Any other failure reported by the storage backend, passed through unchanged
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for qbank-core operations
pub type Result<T> = std::result::Result<T, QbankError>;

impl QbankError {
    /// Create a duplicate question error
    pub fn duplicate(text: impl Into<String>) -> Self {
        Self::DuplicateQuestion { text: text.into() }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateQuestion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QbankError::duplicate("Duplicate check");
        assert_eq!(
            err.to_string(),
            "duplicate question: 'Duplicate check' already exists"
        );

        let err: QbankError = ValidationError::Blank { field: "answer" }.into();
        assert_eq!(err.to_string(), "invalid input: answer cannot be empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_storage_error_conversion() {
        let storage = StorageError::Database(sqlx::Error::RowNotFound);
        let err: QbankError = storage.into();

        assert!(matches!(err, QbankError::Storage(StorageError::Database(_))));
        assert!(!err.is_duplicate());
    }
}
