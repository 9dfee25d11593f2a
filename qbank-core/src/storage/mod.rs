//! Storage collaborators for the question store
//!
//! A backend only has to insert a validated question and list every stored
//! question in insertion order. Backends must reject a second question with
//! the same text by returning [`StorageError::UniqueViolation`].

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::models::{NewQuestion, Question};

pub use memory::MemoryQuestions;
pub use sqlite::SqliteQuestions;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("unique constraint violated: {column} '{value}' already stored")]
    UniqueViolation { column: &'static str, value: String },
}

impl StorageError {
    /// Classify an insert failure, surfacing uniqueness conflicts on `text`.
    pub(crate) fn from_insert(err: sqlx::Error, text: &str) -> Self {
        let unique = matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation());
        if unique {
            Self::UniqueViolation {
                column: "text",
                value: text.to_owned(),
            }
        } else {
            Self::Database(err)
        }
    }
}

/// Persistence contract consumed by [`crate::QuestionStore`]
#[async_trait]
pub trait QuestionBackend: Send + Sync {
    /// Persist one question and return the stored record.
    async fn insert(&self, question: &NewQuestion) -> Result<Question, StorageError>;

    /// All stored questions, oldest first.
    async fn select_all(&self) -> Result<Vec<Question>, StorageError>;

    /// Whether a question with exactly this text is stored.
    async fn contains_text(&self, text: &str) -> Result<bool, StorageError> {
        Ok(self.select_all().await?.iter().any(|q| q.text == text))
    }
}
