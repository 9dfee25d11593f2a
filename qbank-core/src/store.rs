//! Question store - validation and duplicate prevention in front of a backend
//!
//! Order of checks on add:
//! 1. text and answer must be non-blank (no storage access on failure)
//! 2. text must not already be stored (exact, case-sensitive)
//! 3. insert; a uniqueness conflict reported by the backend is also a duplicate
//!
//! Step 3 makes the rule hold even when two callers pass step 2 at once.

use tracing::debug;

use crate::error::{QbankError, Result};
use crate::models::{NewQuestion, Question};
use crate::storage::{QuestionBackend, StorageError};

/// Flag stored by [`QuestionStore::create_question`].
pub const DEFAULT_FLAG: bool = false;

/// Gatekeeper between callers and a question backend.
///
/// Borrows the backend; opening and closing the underlying storage is the
/// caller's job.
pub struct QuestionStore<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B> QuestionStore<'a, B>
where
    B: QuestionBackend + ?Sized,
{
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Validate and persist a question.
    ///
    /// # Errors
    ///
    /// - [`QbankError::InvalidInput`] if text or answer is blank
    /// - [`QbankError::DuplicateQuestion`] if the text is already stored
    /// - [`QbankError::Storage`] for any other backend failure
    pub async fn add_question(
        &self,
        text: impl Into<String>,
        answer: impl Into<String>,
        flag: bool,
    ) -> Result<Question> {
        let question = NewQuestion::new(text, answer, flag)?;
        self.insert_unique(&question).await
    }

    /// Same as [`add_question`](Self::add_question) with the flag left unset.
    pub async fn create_question(
        &self,
        text: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Question> {
        self.add_question(text, answer, DEFAULT_FLAG).await
    }

    /// All stored questions in insertion order. Empty when nothing is stored.
    pub async fn read_questions(&self) -> Result<Vec<Question>> {
        let questions = self.backend.select_all().await?;
        debug!(count = questions.len(), "Read questions");
        Ok(questions)
    }

    /// Alias of [`read_questions`](Self::read_questions).
    pub async fn get_all_questions(&self) -> Result<Vec<Question>> {
        self.read_questions().await
    }

    async fn insert_unique(&self, question: &NewQuestion) -> Result<Question> {
        let text = question.text.as_str();

        if self.backend.contains_text(text).await? {
            debug!(text, "Rejected duplicate question");
            return Err(QbankError::duplicate(text));
        }

        match self.backend.insert(question).await {
            Ok(stored) => {
                debug!(id = stored.id, text, "Stored question");
                Ok(stored)
            }
            Err(StorageError::UniqueViolation { value, .. }) => {
                debug!(text, "Question stored concurrently, rejecting as duplicate");
                Err(QbankError::DuplicateQuestion { text: value })
            }
            Err(e) => Err(e.into()),
        }
    }
}
