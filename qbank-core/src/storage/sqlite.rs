//! SQLite question repository
//!
//! - insert: single INSERT ... RETURNING; the UNIQUE(text) constraint decides conflicts
//! - select_all: ordered by id, which follows insertion order

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::{QuestionBackend, StorageError};
use crate::models::{NewQuestion, Question};

/// Question repository over a caller-owned pool
pub struct SqliteQuestions<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SqliteQuestions<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of stored questions without loading rows.
    ///
    /// Test support: lets tests assert store size after rejected inserts.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl QuestionBackend for SqliteQuestions<'_> {
    async fn insert(&self, question: &NewQuestion) -> Result<Question, StorageError> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (text, answer, flag, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, text, answer, flag, created_at
            "#,
        )
        .bind(question.text.as_str())
        .bind(question.answer.as_str())
        .bind(question.flag)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_insert(e, question.text.as_str()))
    }

    async fn select_all(&self) -> Result<Vec<Question>, StorageError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, text, answer, flag, created_at FROM questions ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    async fn contains_text(&self, text: &str) -> Result<bool, StorageError> {
        // Default BINARY collation: exact, case-sensitive comparison
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM questions WHERE text = ?)")
                .bind(text)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }
}
