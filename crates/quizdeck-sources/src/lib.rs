//! quizdeck-sources — concrete question sources and configuration.
//!
//! Implements the `QuestionSource` trait for file-backed streams, plus a
//! scripted in-memory source for testing session behavior, and the
//! `quizdeck.toml` configuration loader.

pub mod config;
pub mod error;
pub mod scripted;
pub mod text_file;

pub use config::{load_config, load_config_from, QuizdeckConfig};
pub use error::SourceError;
pub use scripted::ScriptedSource;
pub use text_file::FileQuestionSource;
