//! Core data model types for quizdeck.
//!
//! A [`Question`] is a validated, immutable record of one prompt and its
//! answer choices. All invariants are checked once at construction; after
//! that the record is read-only.

use serde::Serialize;

use crate::error::QuestionError;

/// One selectable response option: an id the user types, and the text
/// displayed next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Identifier the user answers with. Never blank.
    pub id: String,
    /// Display text. May be empty or whitespace; an empty string can be
    /// a legitimate answer to a question.
    pub text: String,
}

/// A single multiple-choice question.
///
/// Ids are treated as opaque text throughout: the on-disk format calls
/// them numbers, but letters and symbols are prevalent in real quizzes
/// and nothing here ever does arithmetic on them.
///
/// `Deserialize` is deliberately not derived; it would bypass the
/// construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: String,
    text: String,
    choices: Vec<Choice>,
    correct_id: String,
}

impl Question {
    /// Build a validated question from its raw parts.
    ///
    /// The choice ids and texts are positionally paired. Construction
    /// fails unless all of the following hold:
    /// - the two choice sequences have equal length, at least 2;
    /// - `id`, `text`, `correct_id`, and every choice id are non-blank
    ///   (choice texts may be empty or whitespace);
    /// - choice ids are pairwise distinct, choice texts are pairwise
    ///   distinct;
    /// - `correct_id` equals exactly one choice id.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        choice_ids: Vec<String>,
        choice_texts: Vec<String>,
        correct_id: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let id = id.into();
        let text = text.into();
        let correct_id = correct_id.into();

        if choice_ids.len() != choice_texts.len() {
            return Err(QuestionError::ChoiceCountMismatch {
                ids: choice_ids.len(),
                texts: choice_texts.len(),
            });
        }
        if choice_ids.len() < 2 {
            return Err(QuestionError::NotEnoughChoices {
                count: choice_ids.len(),
            });
        }
        if id.trim().is_empty() {
            return Err(QuestionError::BlankField {
                field: "question id",
            });
        }
        if text.trim().is_empty() {
            return Err(QuestionError::BlankField {
                field: "question text",
            });
        }
        if correct_id.trim().is_empty() {
            return Err(QuestionError::BlankField {
                field: "correct response id",
            });
        }
        for choice_id in &choice_ids {
            if choice_id.trim().is_empty() {
                return Err(QuestionError::BlankField { field: "choice id" });
            }
        }
        if !choice_ids.contains(&correct_id) {
            return Err(QuestionError::CorrectIdNotAChoice { correct_id });
        }

        let mut choices: Vec<Choice> = Vec::with_capacity(choice_ids.len());
        for (choice_id, choice_text) in choice_ids.into_iter().zip(choice_texts) {
            if choices
                .iter()
                .any(|c| c.id == choice_id || c.text == choice_text)
            {
                return Err(QuestionError::DuplicateChoice {
                    id: choice_id,
                    text: choice_text,
                });
            }
            choices.push(Choice {
                id: choice_id,
                text: choice_text,
            });
        }

        Ok(Self {
            id,
            text,
            choices,
            correct_id,
        })
    }

    /// Question identifier from the header line.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The prompt shown to the user.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The answer choices, in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Id of the correct choice. Always one of [`Self::choices`].
    pub fn correct_id(&self) -> &str {
        &self.correct_id
    }

    /// Check a given answer against the correct response id.
    ///
    /// Total over all strings: exact equality, no trimming, no case
    /// folding. Anything else, including the empty string an exhausted
    /// input stream produces, is simply wrong.
    pub fn is_response_correct(&self, given: &str) -> bool {
        given == self.correct_id
    }

    /// Render the question back into its text-format block: header line,
    /// one line per choice, correct-id line. Parsing the result yields an
    /// identical question as long as no id contains a `". "` sequence.
    pub fn to_block(&self) -> String {
        let mut block = format!("({}) {}\n", self.id, self.text);
        for choice in &self.choices {
            block.push_str(&choice.id);
            block.push_str(". ");
            block.push_str(&choice.text);
            block.push('\n');
        }
        block.push_str(&self.correct_id);
        block.push('\n');
        block
    }
}
