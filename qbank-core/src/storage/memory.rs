//! In-process question storage
//!
//! Same contract as the SQLite repository: ids increase with every insert and
//! text is unique. The uniqueness check and the push happen under one lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::{QuestionBackend, StorageError};
use crate::models::{NewQuestion, Question};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    questions: Vec<Question>,
}

/// Question storage held in memory, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryQuestions {
    rows: Mutex<Rows>,
}

impl MemoryQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Rows> {
        // Rows are only mutated after all checks pass, so a poisoned lock still holds consistent data
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QuestionBackend for MemoryQuestions {
    async fn insert(&self, question: &NewQuestion) -> Result<Question, StorageError> {
        let mut rows = self.lock();

        if rows.questions.iter().any(|q| q.text == question.text.as_str()) {
            return Err(StorageError::UniqueViolation {
                column: "text",
                value: question.text.as_str().to_owned(),
            });
        }

        rows.next_id += 1;
        let stored = Question {
            id: rows.next_id,
            text: question.text.as_str().to_owned(),
            answer: question.answer.as_str().to_owned(),
            flag: question.flag,
            created_at: Utc::now(),
        };
        rows.questions.push(stored.clone());

        Ok(stored)
    }

    async fn select_all(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.lock().questions.clone())
    }

    async fn contains_text(&self, text: &str) -> Result<bool, StorageError> {
        Ok(self.lock().questions.iter().any(|q| q.text == text))
    }
}
