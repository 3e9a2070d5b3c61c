//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdeck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizdeck").unwrap()
}

#[test]
fn validate_valid_file() {
    quizdeck()
        .arg("validate")
        .arg("../../question-sets/trivia.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("All question blocks valid"));
}

#[test]
fn validate_reports_malformed_blocks() {
    quizdeck()
        .arg("validate")
        .arg("../../question-sets/mixed.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 questions"))
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("2 malformed block(s) skipped"));
}

#[test]
fn validate_nonexistent_file() {
    quizdeck()
        .arg("validate")
        .arg("no_such_file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn usage_without_arguments() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: quizdeck"));
}

#[test]
fn run_nonexistent_file() {
    quizdeck()
        .arg("no_such_file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn full_quiz_all_correct() {
    quizdeck()
        .arg("../../question-sets/trivia.txt")
        .write_stdin("1\n2\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginning quiz..."))
        .stdout(predicate::str::contains("Correct! The correct response is 1"))
        .stdout(predicate::str::contains("... Quiz completed!"))
        .stdout(predicate::str::contains("You scored 3 out of 3. That is 100%"));
}

#[test]
fn full_quiz_all_wrong() {
    quizdeck()
        .arg("../../question-sets/trivia.txt")
        .write_stdin("2\n1\na\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect! The correct response is 1"))
        .stdout(predicate::str::contains("You scored 0 out of 3. That is 0%"));
}

#[test]
fn quiz_skips_malformed_blocks() {
    // Two answers for the two valid blocks; the malformed ones must not
    // consume any input.
    quizdeck()
        .arg("../../question-sets/mixed.txt")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Error creating question:"))
        .stdout(predicate::str::contains("Ignoring and proceeding to next."))
        .stdout(predicate::str::contains("You scored 2 out of 2"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdeck.toml"))
        .stdout(predicate::str::contains("Created question-sets/example.txt"));

    assert!(dir.path().join("quizdeck.toml").exists());
    assert!(dir.path().join("question-sets/example.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn bare_invocation_uses_configured_file() {
    let dir = TempDir::new().unwrap();

    quizdeck()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // quizdeck.toml written by init points at the example file, so a
    // bare invocation runs that quiz.
    quizdeck()
        .current_dir(dir.path())
        .write_stdin("1\n2\na\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("... Quiz completed!"))
        .stdout(predicate::str::contains("You scored 3 out of 3"));
}

#[test]
fn empty_question_file_completes_immediately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    quizdeck()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("... Quiz completed!"))
        .stdout(predicate::str::contains("You scored 0 out of 0"));
}

#[test]
fn help_output() {
    quizdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive multiple-choice quiz runner",
        ));
}

#[test]
fn version_output() {
    quizdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizdeck"));
}
