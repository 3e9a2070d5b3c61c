//! Interactive quiz session loop.
//!
//! Pulls questions from a [`QuestionSource`], displays them on an
//! injected sink, reads one answer line per question from an injected
//! input, and tallies the score. Malformed blocks are reported and
//! skipped; they never abort the session.

use std::io::{self, BufRead, Write};

use crate::traits::QuestionSource;

/// One interactive quiz session over a question source.
///
/// All output goes to the injected sink and all input comes from the
/// injected reader; a console, a file, or an in-memory buffer works
/// equally well. A session is driven to completion by a single call to
/// [`QuizSession::run`].
pub struct QuizSession<S, W, R> {
    source: S,
    output: W,
    input: R,
    total_questions: u32,
    correct_answers: u32,
}

impl<S, W, R> QuizSession<S, W, R>
where
    S: QuestionSource,
    W: Write,
    R: BufRead,
{
    /// Create a session over the given source, output sink, and answer
    /// input.
    pub fn new(source: S, output: W, input: R) -> Self {
        Self {
            source,
            output,
            input,
            total_questions: 0,
            correct_answers: 0,
        }
    }

    /// Questions asked so far. Only mutated inside [`QuizSession::run`].
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Correctly answered questions so far.
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Administer the quiz to completion and return the final score as
    /// a ratio of correct answers to questions asked.
    ///
    /// With zero questions the ratio is `0.0 / 0.0`, i.e. NaN; callers
    /// that need a number must check [`QuizSession::total_questions`].
    /// Sink write failures propagate; input is read blocking with no
    /// timeout, and end of input reads as an empty (wrong) answer.
    pub fn run(&mut self) -> io::Result<f64> {
        self.print_instructions()?;
        writeln!(self.output, "Beginning quiz...")?;

        // Questions are read one at a time rather than up front: there
        // is no reason to hold the whole file, and a malformed block
        // late in the file must not spoil the questions before it.
        while self.source.has_more_content() {
            let question = match self.source.read_next_question() {
                Ok(Some(question)) => question,
                Ok(None) => {
                    // The source claimed more content but produced
                    // nothing. Sources may be inconsistent here; warn
                    // and keep going rather than trusting either answer.
                    writeln!(self.output, "Warning: Invalid question.")?;
                    writeln!(self.output, "Ignoring and proceeding to next.")?;
                    writeln!(self.output)?;
                    continue;
                }
                Err(e) => {
                    tracing::warn!("skipping malformed question block: {e}");
                    writeln!(self.output, "Warning: Error creating question: {e}")?;
                    writeln!(self.output, "Ignoring and proceeding to next.")?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            writeln!(self.output, "({}) {}", question.id(), question.text())?;
            for choice in question.choices() {
                writeln!(self.output, "{}. {}", choice.id, choice.text)?;
            }
            writeln!(self.output)?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            let is_correct = question.is_response_correct(&answer);
            self.total_questions += 1;
            if is_correct {
                self.correct_answers += 1;
            }

            writeln!(
                self.output,
                "{}! The correct response is {}",
                if is_correct { "Correct" } else { "Incorrect" },
                question.correct_id()
            )?;
            writeln!(self.output)?;
        }

        writeln!(self.output, "... Quiz completed!")?;
        let score = f64::from(self.correct_answers) / f64::from(self.total_questions);
        writeln!(
            self.output,
            "You scored {} out of {}. That is {:.0}%",
            self.correct_answers,
            self.total_questions,
            score * 100.0
        )?;
        self.output.flush()?;

        Ok(score)
    }

    fn print_instructions(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "For each question, type the id of your response and press Enter."
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "EXAMPLE:")?;
        writeln!(self.output, "(0) What is the right answer?")?;
        writeln!(self.output, "1. Wrong answer")?;
        writeln!(self.output, "2. Right answer")?;
        writeln!(self.output, "3. Wrong answer")?;
        writeln!(self.output)?;
        writeln!(self.output, "You would type 2 and then press Enter.")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one answer line, without its terminator. End of input
    /// produces an empty string, which never matches a correct id.
    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
