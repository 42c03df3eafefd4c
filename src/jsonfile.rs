//! Reading JSON files and deciding what to do when that fails.
//!
//! [`FallbackReader`] looks inside the error it gets back to pick the next
//! file to try: a missing file falls back to `malformed.json`, a syntax error
//! falls back to `good.json`. Any other failure is returned to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::errors::{chain, FileError, MessageError, WrapErr};

pub type JsonMap = Map<String, Value>;

pub const MALFORMED_FIXTURE: &str = "malformed.json";
pub const GOOD_FIXTURE: &str = "good.json";

/// Read a file and decode it as a JSON object.
pub fn read_json_file(path: &Path) -> Result<JsonMap, MessageError> {
    let name = path.display().to_string();

    let bytes = fs::read(path)
        .map_err(|e| FileError::new(name.clone(), e).wrap_err("read_json_file file error"))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| FileError::new(name, e).wrap_err("read_json_file JSON error"))
}

#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("an unknown file error occurred: {0}")]
    UnknownFile(#[source] MessageError),

    #[error("would fall back to {} again, giving up", .path.display())]
    Cycle {
        path: PathBuf,
        #[source]
        last: MessageError,
    },

    #[error(transparent)]
    Other(MessageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded,
    /// The file did not exist; the reader moved on to `fallback`.
    Missing { fallback: PathBuf },
    /// The file was not valid JSON; the reader moved on to `fallback`.
    Malformed { fallback: PathBuf },
    Failed,
}

/// One file the reader tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub path: PathBuf,
    pub error: Option<String>,
    pub outcome: Outcome,
}

enum Next {
    Fallback(Outcome, PathBuf),
    GiveUp(FallbackError),
}

pub struct FallbackReader {
    dir: PathBuf,
    attempts: Vec<Attempt>,
}

impl FallbackReader {
    /// Relative paths, including the fallback fixtures, resolve against `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FallbackReader {
            dir: dir.into(),
            attempts: Vec::new(),
        }
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<JsonMap, FallbackError> {
        let mut path = self.resolve(path.as_ref());
        // Only this call's attempts count towards a cycle.
        let start = self.attempts.len();

        loop {
            let err = match read_json_file(&path) {
                Ok(map) => {
                    self.record(path, None, Outcome::Loaded);
                    return Ok(map);
                }
                Err(err) => err,
            };

            let text = err.to_string();
            match self.next_step(start, &path, err) {
                Next::Fallback(outcome, next) => {
                    debug!(from = %path.display(), to = %next.display(), "falling back");
                    self.record(path, Some(text), outcome);
                    path = next;
                }
                Next::GiveUp(reason) => {
                    self.record(path, Some(text), Outcome::Failed);
                    return Err(reason);
                }
            }
        }
    }

    fn next_step(&self, start: usize, current: &Path, err: MessageError) -> Next {
        if let Some(io_err) = chain::find::<io::Error>(&err) {
            if io_err.kind() != io::ErrorKind::NotFound {
                return Next::GiveUp(FallbackError::UnknownFile(err));
            }
            return self.fallback_to(start, current, MALFORMED_FIXTURE, err, |fallback| {
                Outcome::Missing { fallback }
            });
        }

        if let Some(json_err) = chain::find::<serde_json::Error>(&err) {
            if matches!(json_err.classify(), Category::Syntax | Category::Eof) {
                return self.fallback_to(start, current, GOOD_FIXTURE, err, |fallback| {
                    Outcome::Malformed { fallback }
                });
            }
        }

        Next::GiveUp(FallbackError::Other(err))
    }

    fn fallback_to(
        &self,
        start: usize,
        current: &Path,
        fixture: &str,
        err: MessageError,
        outcome: impl FnOnce(PathBuf) -> Outcome,
    ) -> Next {
        let next = self.resolve(Path::new(fixture));
        if next == current || self.attempts[start..].iter().any(|a| a.path == next) {
            return Next::GiveUp(FallbackError::Cycle { path: next, last: err });
        }
        Next::Fallback(outcome(next.clone()), next)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    fn record(&mut self, path: PathBuf, error: Option<String>, outcome: Outcome) {
        self.attempts.push(Attempt {
            path,
            error,
            outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixtures(good: Option<&str>, malformed: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        if let Some(body) = good {
            fs::write(dir.path().join(GOOD_FIXTURE), body).unwrap();
        }
        if let Some(body) = malformed {
            fs::write(dir.path().join(MALFORMED_FIXTURE), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_read_json_file_ok() {
        let dir = fixtures(Some(r#"{"name": "good"}"#), None);
        let map = read_json_file(&dir.path().join(GOOD_FIXTURE)).unwrap();
        assert_eq!(map["name"], "good");
    }

    #[test]
    fn test_read_json_file_missing_wraps_file_error() {
        let dir = fixtures(None, None);
        let path = dir.path().join("nope.json");
        let err = read_json_file(&path).unwrap_err();

        assert!(err.to_string().starts_with("read_json_file file error: an error occurred with file ("));
        let file_err = chain::find::<FileError>(&err).unwrap();
        assert_eq!(file_err.filename(), path.display().to_string());
        let io_err = chain::find::<io::Error>(&err).unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_json_file_syntax_error() {
        let dir = fixtures(None, Some("{not json"));
        let err = read_json_file(&dir.path().join(MALFORMED_FIXTURE)).unwrap_err();
        assert_eq!(err.message(), "read_json_file JSON error");
        assert!(chain::find::<serde_json::Error>(&err).is_some());
    }

    #[test]
    fn test_full_fallback_path() {
        let dir = fixtures(Some(r#"{"status": "ok"}"#), Some("{\"broken\": "));
        let mut reader = FallbackReader::new(dir.path());

        let map = reader.read("/file/does/not/exist/go/away").unwrap();
        assert_eq!(map["status"], "ok");

        let outcomes: Vec<&Outcome> = reader.attempts().iter().map(|a| &a.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                &Outcome::Missing {
                    fallback: dir.path().join(MALFORMED_FIXTURE)
                },
                &Outcome::Malformed {
                    fallback: dir.path().join(GOOD_FIXTURE)
                },
                &Outcome::Loaded,
            ]
        );
        assert!(reader.attempts()[0].error.is_some());
        assert!(reader.attempts()[2].error.is_none());
    }

    #[test]
    fn test_reader_can_be_reused() {
        let dir = fixtures(Some(r#"{"status": "ok"}"#), Some("{\"broken\": "));
        let mut reader = FallbackReader::new(dir.path());

        let first = reader.read("/no/such/a.json").unwrap();
        let second = reader.read("/no/such/b.json").unwrap();
        assert_eq!(first, second);
        assert_eq!(reader.attempts().len(), 6);
        assert_eq!(reader.attempts()[5].outcome, Outcome::Loaded);
    }

    #[test]
    fn test_relative_path_resolves_against_dir() {
        let dir = fixtures(Some("{}"), None);
        let mut reader = FallbackReader::new(dir.path());
        let map = reader.read(GOOD_FIXTURE).unwrap();
        assert!(map.is_empty());
        assert_eq!(reader.attempts()[0].path, dir.path().join(GOOD_FIXTURE));
    }

    #[test]
    fn test_missing_fixtures_stop_instead_of_looping() {
        let dir = fixtures(None, None);
        let mut reader = FallbackReader::new(dir.path());

        let err = reader.read("missing.json").unwrap_err();
        assert!(matches!(err, FallbackError::Cycle { .. }));
        assert_eq!(reader.attempts().len(), 2);
        assert_eq!(reader.attempts()[1].outcome, Outcome::Failed);
    }

    #[test]
    fn test_malformed_good_fixture_is_a_cycle() {
        let dir = fixtures(Some("{oops"), Some("{oops"));
        let mut reader = FallbackReader::new(dir.path());

        let err = reader.read(MALFORMED_FIXTURE).unwrap_err();
        match err {
            FallbackError::Cycle { path, .. } => assert_eq!(path, dir.path().join(GOOD_FIXTURE)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_valid_json_of_wrong_shape_is_returned() {
        let dir = fixtures(Some("[1, 2, 3]"), None);
        let mut reader = FallbackReader::new(dir.path());

        let err = reader.read(GOOD_FIXTURE).unwrap_err();
        assert!(matches!(err, FallbackError::Other(_)));
    }

    #[test]
    fn test_directory_is_an_unknown_file_error() {
        let dir = fixtures(None, None);
        let mut reader = FallbackReader::new(dir.path());

        let err = reader.read(dir.path()).unwrap_err();
        assert!(matches!(err, FallbackError::UnknownFile(_)));
        assert!(err.to_string().starts_with("an unknown file error occurred"));
    }
}
