//! Question record and validated input types
//!
//! Text and answer are stored exactly as supplied; validation only
//! rejects values that are blank after trimming.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_non_blank, ValidationError};

/// Validated question prompt (non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create question text, rejecting empty or whitespace-only input.
    ///
    /// # Example
    /// ```
    /// use qbank_core::models::QuestionText;
    ///
    /// assert!(QuestionText::new("is the sky blue?").is_ok());
    /// assert!(QuestionText::new("   ").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        require_non_blank("question text", &s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated answer (non-blank)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        require_non_blank("answer", &s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AnswerText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated question waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: QuestionText,
    pub answer: AnswerText,
    /// Opaque caller-defined classification, stored as-is.
    pub flag: bool,
}

impl NewQuestion {
    /// Validate text and answer. Text is checked first.
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        flag: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            text: QuestionText::new(text)?,
            answer: AnswerText::new(answer)?,
            flag,
        })
    }
}

/// Question record as stored by a backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Storage-assigned id; ascending ids follow insertion order
    pub id: i64,
    pub text: String,
    pub answer: String,
    pub flag: bool,
    pub created_at: DateTime<Utc>,
}

/// Renders the question prompt only.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
