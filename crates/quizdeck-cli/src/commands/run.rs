//! The default `quizdeck <FILE>` invocation: run one quiz session.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use quizdeck_core::session::QuizSession;
use quizdeck_sources::{load_config, FileQuestionSource};

pub fn execute(questions: Option<PathBuf>) -> Result<()> {
    let path = match questions {
        Some(path) => path,
        // No argument: fall back to the configured default file, if any.
        None => match load_config()?.questions_file {
            Some(path) => path,
            None => {
                println!("Usage: quizdeck <QUESTION_FILE>");
                return Ok(());
            }
        },
    };

    let source = FileQuestionSource::open(&path)?;

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut session = QuizSession::new(source, stdout.lock(), stdin.lock());
    let score = session.run()?;

    tracing::debug!(
        "session over {} finished: {}/{} correct (score {score})",
        path.display(),
        session.correct_answers(),
        session.total_questions(),
    );

    Ok(())
}
