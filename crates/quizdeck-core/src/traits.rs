//! The question-source capability trait.
//!
//! Implemented by the streaming text parser in this crate and by the
//! concrete sources in `quizdeck-sources`. The quiz session only ever
//! talks to this trait, so file, in-memory, and scripted sources are
//! interchangeable.

use crate::error::ReadError;
use crate::model::Question;

/// A lazy sequence of questions read from some backing stream.
pub trait QuestionSource {
    /// True while the underlying stream has unread content.
    ///
    /// Takes `&mut self` because answering generally requires peeking
    /// the stream's buffer.
    fn has_more_content(&mut self) -> bool;

    /// Read the next question block.
    ///
    /// - `Ok(Some(question))`: a valid question was parsed.
    /// - `Ok(None)`: the stream is exhausted.
    /// - `Err(_)`: one block was malformed; the stream is positioned
    ///   after it, and the caller decides whether to skip and continue.
    fn read_next_question(&mut self) -> Result<Option<Question>, ReadError>;

    /// Drain the stream, keeping every successfully parsed question in
    /// encounter order. Malformed blocks are skipped with a warning;
    /// end-of-stream ends the read normally.
    fn read_all_questions(&mut self) -> Vec<Question> {
        let mut questions = Vec::new();
        while self.has_more_content() {
            match self.read_next_question() {
                Ok(Some(question)) => questions.push(question),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("skipping malformed question block: {e}");
                }
            }
        }
        questions
    }
}
