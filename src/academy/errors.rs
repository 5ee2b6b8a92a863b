use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the learning-domain stores and engine.
#[derive(Debug, Error)]
pub enum AcademyError {
    /// Returned when a lookup-based mutation targets a missing entity.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// A required form field was empty or otherwise malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An answer was submitted while the current question's result is
    /// showing; each question scores at most one attempt per session.
    #[error("answer already submitted for this question")]
    AnswerLocked,

    /// Advance was requested before the current question was answered.
    #[error("no answer submitted for the current question")]
    NoAnswerPending,

    /// The chosen option index does not exist on the current question.
    #[error("answer index {index} is out of range ({options} options)")]
    InvalidAnswer { index: usize, options: usize },

    /// The quiz session already reported its final score.
    #[error("quiz session is finished")]
    SessionFinished,

    /// Seed data failed to parse or violated a content invariant.
    #[error("seed data error: {0}")]
    SeedData(String),

    /// Wrapper around IO errors (seed file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
