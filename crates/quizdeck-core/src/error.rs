//! Question validation and read error types.
//!
//! Defined in `quizdeck-core` so callers can match on the failure kind
//! (skip a malformed block, abort on a dead stream) without string
//! matching.

use thiserror::Error;

/// Errors raised when constructing a [`crate::model::Question`].
///
/// Each variant corresponds to one violated construction invariant; the
/// first violated invariant wins.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// A required field was empty or whitespace-only.
    #[error("{field} cannot be empty or whitespace")]
    BlankField { field: &'static str },

    /// The choice id and choice text sequences differ in length.
    #[error("question has {ids} choice ids but {texts} choice texts")]
    ChoiceCountMismatch { ids: usize, texts: usize },

    /// Fewer than two choices. A question with one possible response
    /// stops being a question.
    #[error("question needs at least 2 choices, got {count}")]
    NotEnoughChoices { count: usize },

    /// A choice id or choice text appeared more than once.
    #[error("there is a duplicate answer: {id}. {text}")]
    DuplicateChoice { id: String, text: String },

    /// The correct response id is not one of the choice ids.
    #[error("correct response id {correct_id:?} is not among the choice ids")]
    CorrectIdNotAChoice { correct_id: String },
}

/// Errors raised by a single-question read from a source.
///
/// A `ReadError` is scoped to one block: bulk reads and the quiz loop
/// skip the offending block and keep going.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A header line opened with `(` but never closed with `") "`.
    #[error("question header has no \") \" delimiter: {line:?}")]
    HeaderMissingDelimiter { line: String },

    /// The collected fields failed question validation.
    #[error("invalid question: {0}")]
    InvalidQuestion(#[from] QuestionError),

    /// The underlying stream failed mid-read.
    #[error("failed to read from question stream: {0}")]
    Io(#[from] std::io::Error),
}
