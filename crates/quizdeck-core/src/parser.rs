//! Streaming parser for the line-oriented question format.
//!
//! One question block looks like:
//!
//! ```text
//! (1) What is the hex color for white?
//! 1. #FFFFFF
//! 2. #000000
//! 1
//! ```
//!
//! A header line carries the question id in parentheses followed by the
//! prompt; each following line containing `". "` is a choice; the first
//! line that is not a choice is the correct-response id. Lines before a
//! header are silently discarded, so blank lines (or arbitrary junk)
//! between blocks are tolerated.

use std::io::{self, BufRead, Cursor};

use crate::error::ReadError;
use crate::model::Question;
use crate::traits::QuestionSource;

/// Separator between a question id and the prompt on a header line.
const HEADER_DELIM: &str = ") ";
/// Separator between a choice id and its text on a choice line.
const CHOICE_DELIM: &str = ". ";

/// A [`QuestionSource`] that parses the text format from any buffered
/// reader, one block per read.
///
/// The parser is deliberately tolerant: junk ahead of a block is skipped,
/// and a malformed block produces a [`ReadError`] scoped to that block
/// while leaving the stream positioned at the next one.
pub struct TextQuestionSource<R> {
    reader: R,
}

impl<R: BufRead> TextQuestionSource<R> {
    /// Wrap a buffered reader in a streaming question parser.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// End-of-stream check. A failing stream reads as exhausted so that
    /// callers looping on [`QuestionSource::has_more_content`] terminate.
    fn at_end(&mut self) -> bool {
        self.reader.fill_buf().map(|b| b.is_empty()).unwrap_or(true)
    }

    /// Read one line without its terminator (`\n` or `\r\n`).
    /// `Ok(None)` at end of stream.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<'a> TextQuestionSource<Cursor<&'a [u8]>> {
    /// Parse directly from an in-memory string (useful for testing).
    pub fn from_text(content: &'a str) -> Self {
        Self::new(Cursor::new(content.as_bytes()))
    }
}

impl<R: BufRead> QuestionSource for TextQuestionSource<R> {
    fn has_more_content(&mut self) -> bool {
        !self.at_end()
    }

    fn read_next_question(&mut self) -> Result<Option<Question>, ReadError> {
        // Skip forward to the next header line. Reaching end of stream
        // here is a normal "no more questions", not an error.
        let mut line = match self.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        while !line.starts_with('(') && !self.at_end() {
            line = match self.next_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
        }
        if !line.starts_with('(') {
            return Ok(None);
        }

        let Some(delim) = line.find(HEADER_DELIM) else {
            return Err(ReadError::HeaderMissingDelimiter { line });
        };
        let id = line[1..delim].to_string();
        let text = line[delim + HEADER_DELIM.len()..].to_string();

        // Collect choice lines. A line that looks like a choice but is
        // the final line of the stream is NOT a choice: the block's last
        // line is always taken as the correct-response id, even when the
        // block was truncated.
        let mut choice_ids = Vec::new();
        let mut choice_texts = Vec::new();
        let mut next = self.next_line()?;
        while let Some(current) = next.as_deref() {
            let Some((choice_id, choice_text)) = current.split_once(CHOICE_DELIM) else {
                break;
            };
            if self.at_end() {
                break;
            }
            choice_ids.push(choice_id.to_string());
            choice_texts.push(choice_text.to_string());
            next = self.next_line()?;
        }

        // A stream that ends right after the header leaves the correct id
        // blank; validation below rejects the block.
        let correct_id = next.unwrap_or_default();

        let question = Question::new(id, text, choice_ids, choice_texts, correct_id)?;
        Ok(Some(question))
    }
}
