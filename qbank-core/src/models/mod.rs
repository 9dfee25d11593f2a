//! Question models with validation at construction
//!
//! Caller input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod question;
pub mod validation;

pub use question::{AnswerText, NewQuestion, Question, QuestionText};
pub use validation::ValidationError;
