//! quizdeck configuration.
//!
//! A small optional `quizdeck.toml` in the working directory. Its only
//! setting today is the question file used when the CLI is invoked with
//! no arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// Question file to run when none is given on the command line.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

/// Load configuration from `quizdeck.toml` in the current directory, or
/// defaults when the file does not exist.
pub fn load_config() -> Result<QuizdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or from the default location.
///
/// An explicit path must exist; the default location is optional. A file
/// that exists but cannot be read or parsed is always an error.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("config file not found: {}", p.display());
            }
            Some(p.to_path_buf())
        }
        None => {
            let local = PathBuf::from("quizdeck.toml");
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizdeckConfig::default()),
    }
}
