//! The `quizdeck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_core::traits::QuestionSource;
use quizdeck_sources::FileQuestionSource;

pub fn execute(questions: PathBuf) -> Result<()> {
    let mut source = FileQuestionSource::open(&questions)?;

    let mut parsed = Vec::new();
    let mut failures = Vec::new();

    while source.has_more_content() {
        match source.read_next_question() {
            Ok(Some(question)) => parsed.push(question),
            Ok(None) => {}
            Err(e) => failures.push(e),
        }
    }

    println!(
        "Question file: {} ({} questions)",
        questions.display(),
        parsed.len()
    );
    for failure in &failures {
        println!("  WARNING: {failure}");
    }

    if !parsed.is_empty() {
        print_summary(&parsed);
    }

    if failures.is_empty() {
        println!("All question blocks valid.");
    } else {
        println!("\n{} malformed block(s) skipped.", failures.len());
    }

    Ok(())
}

fn print_summary(questions: &[quizdeck_core::model::Question]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["ID", "Question", "Choices", "Correct"]);

    for question in questions {
        table.add_row(vec![
            Cell::new(question.id()),
            Cell::new(question.text()),
            Cell::new(question.choices().len()),
            Cell::new(question.correct_id()),
        ]);
    }

    println!("{table}");
}
