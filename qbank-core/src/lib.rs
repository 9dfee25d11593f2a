//! qbank-core: question store with validation and duplicate prevention
//!
//! The [`QuestionStore`] validates candidate question/answer pairs, rejects
//! duplicate question text, and delegates persistence to a
//! [`QuestionBackend`]. A SQLite backend built on sqlx and an in-memory
//! backend are provided.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use config::QbankConfig;
pub use error::{QbankError, Result};
pub use models::{AnswerText, NewQuestion, Question, QuestionText, ValidationError};
pub use storage::{MemoryQuestions, QuestionBackend, SqliteQuestions, StorageError};
pub use store::QuestionStore;
