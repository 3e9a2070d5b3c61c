//! quizdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizdeck",
    version,
    about = "Interactive multiple-choice quiz runner",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Question file to run a quiz from
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a question file and summarize its contents
    Validate {
        /// Path to the question file
        questions: PathBuf,
    },

    /// Create a starter config and example question file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Validate { questions }) => commands::validate::execute(questions),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::run::execute(cli.questions),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
