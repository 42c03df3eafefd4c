//! Errors 8: Interrogating Errors
//! Look inside an error to decide what to do next.
//!
//! A missing file falls back to `malformed.json`; its syntax error falls back
//! to `good.json`. Any other decode failure, such as valid JSON that is not
//! an object, is reported and left alone: there is nothing to fall back to.
//! Set LESSONS_FIXTURES_DIR to read fixtures from elsewhere.
//!
//! Run with: cargo run --bin e08_interrogating_errors

use anyhow::Context as _;
use lessons::config::Settings;
use lessons::jsonfile::{Attempt, FallbackError, FallbackReader, JsonMap, Outcome};
use lessons::section;

const START: &str = "/file/does/not/exist/go/away";

fn describe(attempt: &Attempt) -> Vec<String> {
    let mut lines = vec![format!("reading from: {}", attempt.path.display())];

    if let Some(err) = &attempt.error {
        lines.push(format!("uh-oh: {}", err));
    }

    match &attempt.outcome {
        Outcome::Missing { fallback } => lines.push(format!(
            "we couldn't read from {} falling back to {}",
            attempt.path.display(),
            fallback.display()
        )),
        Outcome::Malformed { fallback } => lines.push(format!(
            "we couldn't parse JSON due to a syntax error, falling back to {}",
            fallback.display()
        )),
        Outcome::Loaded | Outcome::Failed => {}
    }

    lines
}

/// `Ok(None)` when the reader gave up on an error it has no fallback for;
/// the attempt log already shows it. Running out of fallbacks is unhandled.
fn settle(result: Result<JsonMap, FallbackError>) -> anyhow::Result<Option<JsonMap>> {
    match result {
        Ok(data) => Ok(Some(data)),
        Err(FallbackError::Other(_)) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("no usable JSON starting from {}", START)),
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    lessons::telemetry::init_with(&settings);

    section("Reading JSON with fallbacks");
    let mut reader = FallbackReader::new(&settings.fixtures_dir);
    let result = reader.read(START);

    for attempt in reader.attempts() {
        for line in describe(attempt) {
            println!("{}", line);
        }
    }

    // Running out of fallbacks is the unhandled case and ends main with Err.
    match settle(result)? {
        Some(data) => println!("this is our data: {}", serde_json::Value::Object(data)),
        None => println!("no data, and nothing to fall back to"),
    }

    println!("\n=== Key Points ===");
    println!("1. chain::find::<io::Error> finds the I/O cause under our wrappers");
    println!("2. ErrorKind::NotFound is the sentinel for a missing file");
    println!("3. serde_json::Error::classify() tells syntax errors apart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons::errors::MessageError;
    use std::path::PathBuf;

    #[test]
    fn test_describe_missing() {
        let attempt = Attempt {
            path: PathBuf::from("/nope"),
            error: Some("gone".to_string()),
            outcome: Outcome::Missing {
                fallback: PathBuf::from("/fixtures/malformed.json"),
            },
        };
        assert_eq!(
            describe(&attempt),
            vec![
                "reading from: /nope",
                "uh-oh: gone",
                "we couldn't read from /nope falling back to /fixtures/malformed.json",
            ]
        );
    }

    #[test]
    fn test_describe_loaded() {
        let attempt = Attempt {
            path: PathBuf::from("/fixtures/good.json"),
            error: None,
            outcome: Outcome::Loaded,
        };
        assert_eq!(describe(&attempt), vec!["reading from: /fixtures/good.json"]);
    }

    #[test]
    fn test_settle_tolerates_errors_without_fallback() {
        let other = FallbackError::Other(MessageError::new("invalid type: sequence"));
        assert!(settle(Err(other)).unwrap().is_none());

        let cycle = FallbackError::Cycle {
            path: PathBuf::from("/fixtures/malformed.json"),
            last: MessageError::new("gone"),
        };
        let err = settle(Err(cycle)).unwrap_err();
        assert!(format!("{:#}", err).contains("giving up"));
    }

    #[test]
    fn test_array_fixture_is_reported_not_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("malformed.json"), "[1, 2, 3]").unwrap();

        let mut reader = FallbackReader::new(dir.path());
        assert!(settle(reader.read(START)).unwrap().is_none());
        let last = reader.attempts().last().unwrap();
        assert_eq!(last.outcome, Outcome::Failed);
        assert!(describe(last)[1].starts_with("uh-oh: "));
    }

    #[test]
    fn test_bundled_fixtures_end_in_good_json() {
        let mut reader = FallbackReader::new(Settings::default().fixtures_dir);
        let data = reader.read(START).unwrap();
        assert_eq!(data["name"], "good");
        assert_eq!(reader.attempts().len(), 3);
    }
}
