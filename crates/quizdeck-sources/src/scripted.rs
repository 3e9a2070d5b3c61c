//! Scripted question source for testing.

use std::collections::VecDeque;

use quizdeck_core::error::ReadError;
use quizdeck_core::model::Question;
use quizdeck_core::traits::QuestionSource;

/// A [`QuestionSource`] that replays a fixed script of read outcomes.
///
/// Useful for driving a quiz session without any file: each call to
/// `read_next_question` pops the next scripted outcome: a question, a
/// read error, or a spurious `None` (for sources that contradict their
/// own `has_more_content`). Records the number of reads made so tests
/// can assert interaction counts.
#[derive(Default)]
pub struct ScriptedSource {
    reads: VecDeque<Result<Option<Question>, ReadError>>,
    read_calls: u32,
}

impl ScriptedSource {
    /// Create an empty script: no content, reads return `Ok(None)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script that yields the given questions in order.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut source = Self::new();
        for question in questions {
            source.push_question(question);
        }
        source
    }

    /// Append a successful read to the script.
    pub fn push_question(&mut self, question: Question) {
        self.reads.push_back(Ok(Some(question)));
    }

    /// Append a failing read (one malformed block) to the script.
    pub fn push_error(&mut self, error: ReadError) {
        self.reads.push_back(Err(error));
    }

    /// Append a read that claims content but yields nothing.
    pub fn push_nothing(&mut self) {
        self.reads.push_back(Ok(None));
    }

    /// Number of `read_next_question` calls made against this source.
    pub fn read_calls(&self) -> u32 {
        self.read_calls
    }
}

impl QuestionSource for ScriptedSource {
    fn has_more_content(&mut self) -> bool {
        !self.reads.is_empty()
    }

    fn read_next_question(&mut self) -> Result<Option<Question>, ReadError> {
        self.read_calls += 1;
        self.reads.pop_front().unwrap_or(Ok(None))
    }
}
