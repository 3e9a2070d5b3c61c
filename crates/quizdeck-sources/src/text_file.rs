//! File-backed question source.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use quizdeck_core::error::ReadError;
use quizdeck_core::model::Question;
use quizdeck_core::parser::TextQuestionSource;
use quizdeck_core::traits::QuestionSource;

use crate::error::SourceError;

/// A [`QuestionSource`] reading the text format from a file on disk.
///
/// The open file handle is exclusively owned by this source and released
/// when the source is dropped or when [`FileQuestionSource::reopen`]
/// replaces it.
pub struct FileQuestionSource {
    path: PathBuf,
    inner: TextQuestionSource<BufReader<File>>,
}

impl FileQuestionSource {
    /// Open a question file.
    ///
    /// Fails with [`SourceError::BlankPath`] for an empty or
    /// whitespace-only path and [`SourceError::NotFound`] when the path
    /// is not an existing file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let (path, inner) = Self::open_reader(path)?;
        Ok(Self { path, inner })
    }

    /// Point this source at a different file.
    ///
    /// The new path is validated and opened first; only then is the
    /// previous handle replaced (and thereby closed). On error the
    /// source keeps reading from its current file.
    pub fn reopen(&mut self, path: impl AsRef<Path>) -> Result<(), SourceError> {
        let (path, inner) = Self::open_reader(path.as_ref())?;
        tracing::debug!("question source now reading {}", path.display());
        self.path = path;
        self.inner = inner;
        Ok(())
    }

    /// The file currently backing this source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_reader(
        path: &Path,
    ) -> Result<(PathBuf, TextQuestionSource<BufReader<File>>), SourceError> {
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(SourceError::BlankPath);
        }
        if !path.is_file() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Ok((
            path.to_path_buf(),
            TextQuestionSource::new(BufReader::new(file)),
        ))
    }
}

impl QuestionSource for FileQuestionSource {
    fn has_more_content(&mut self) -> bool {
        self.inner.has_more_content()
    }

    fn read_next_question(&mut self) -> Result<Option<Question>, ReadError> {
        self.inner.read_next_question()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_BLOCKS: &str = "\
(1) First?
1. a
2. b
1
(2) Second?
1. a
2. b
2
";

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn open_and_read_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "questions.txt", TWO_BLOCKS);

        let mut source = FileQuestionSource::open(&path).unwrap();
        assert_eq!(source.path(), path);
        assert!(source.has_more_content());

        let questions = source.read_all_questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id(), "1");
        assert_eq!(questions[1].id(), "2");
        assert!(!source.has_more_content());
    }

    #[test]
    fn empty_file_has_no_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.txt", "");

        let mut source = FileQuestionSource::open(&path).unwrap();
        assert!(!source.has_more_content());
        assert!(source.read_all_questions().is_empty());
    }

    #[test]
    fn blank_path_rejected() {
        assert!(matches!(
            FileQuestionSource::open(""),
            Err(SourceError::BlankPath)
        ));
        assert!(matches!(
            FileQuestionSource::open("   "),
            Err(SourceError::BlankPath)
        ));
    }

    #[test]
    fn missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            FileQuestionSource::open(&missing),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn directory_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FileQuestionSource::open(dir.path()),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn reopen_switches_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "first.txt", TWO_BLOCKS);
        let second = write_file(&dir, "second.txt", "(9) Other?\n1. x\n2. y\n2\n");

        let mut source = FileQuestionSource::open(&first).unwrap();
        assert_eq!(source.read_all_questions().len(), 2);

        source.reopen(&second).unwrap();
        assert_eq!(source.path(), second);
        let questions = source.read_all_questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id(), "9");
    }

    #[test]
    fn failed_reopen_keeps_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "questions.txt", TWO_BLOCKS);

        let mut source = FileQuestionSource::open(&path).unwrap();
        assert!(source.reopen(dir.path().join("missing.txt")).is_err());
        assert!(source.reopen("").is_err());

        // Still readable from the original file.
        assert_eq!(source.path(), path);
        assert_eq!(source.read_all_questions().len(), 2);
    }
}
