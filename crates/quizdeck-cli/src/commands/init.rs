//! The `quizdeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizdeck.toml
    if std::path::Path::new("quizdeck.toml").exists() {
        println!("quizdeck.toml already exists, skipping.");
    } else {
        std::fs::write("quizdeck.toml", SAMPLE_CONFIG)?;
        println!("Created quizdeck.toml");
    }

    // Create example question file
    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.txt");
    if example_path.exists() {
        println!("question-sets/example.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTIONS)?;
        println!("Created question-sets/example.txt");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizdeck validate question-sets/example.txt");
    println!("  2. Run: quizdeck question-sets/example.txt");
    println!("  3. Or just: quizdeck (quizdeck.toml points at the example file)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

# Question file used when quizdeck is invoked with no arguments.
questions_file = "question-sets/example.txt"
"#;

const EXAMPLE_QUESTIONS: &str = r#"(1) What is the hex color for white?
1. #FFFFFF
2. #000000
1
(2) Which planet is closest to the sun?
1. Venus
2. Mercury
3. Earth
2
(3) What does CPU stand for?
a. Central Processing Unit
b. Computer Power Unit
c. Core Program Utility
a
"#;
