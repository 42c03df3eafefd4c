//! Traits 4: The Error Trait
//! `std::error::Error` is a trait like any other: Display + Debug, plus an
//! optional `source()` that links to the error underneath.
//!
//! Run with: cargo run --bin i04_error_traits

use std::error::Error;

use lessons::errors::inspect::type_label;
use lessons::errors::{chain, BoxError, CustomError, WrapErr};
use lessons::section;
use thiserror::Error;

/// Extra info on top of the error it wraps.
#[derive(Error, Debug)]
#[error("info error ({info}): {source}")]
struct InfoError {
    info: String,
    source: BoxError,
}

impl InfoError {
    fn new(info: &str, inner: impl Into<BoxError>) -> Self {
        InfoError {
            info: info.to_string(),
            source: inner.into(),
        }
    }

    fn info(&self) -> &str {
        &self.info
    }
}

/// A leaf error: no `source()`.
#[derive(Error, Debug, PartialEq)]
#[error("{0}")]
struct AnotherErrType(String);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sentinel error")]
struct SentinelError;

fn return_sentinel_err() -> Result<(), SentinelError> {
    Err(SentinelError)
}

fn orig_err() -> CustomError {
    CustomError::new("an error")
}

fn deeply_wrapped_error() -> BoxError {
    let info = InfoError::new("custom info", orig_err());
    Box::new(
        info.wrap_err("something else")
            .wrap_err("something went wrong")
            .wrap_err("error"),
    )
}

fn label(err: &(dyn Error + 'static)) -> &'static str {
    if err.is::<InfoError>() {
        "InfoError"
    } else if err.is::<AnotherErrType>() {
        "AnotherErrType"
    } else if err.is::<SentinelError>() {
        "SentinelError"
    } else {
        type_label(err)
    }
}

fn comparing_errors() {
    let orig = orig_err();
    let another = AnotherErrType("an error".to_string());

    // `orig == another` does not compile: the types differ. Through `dyn
    // Error` the question can be asked, and the answer is no.
    let orig_dyn: &(dyn Error + 'static) = &orig;
    println!(
        "orig_err is an AnotherErrType equal to another_err? {}",
        orig_dyn.downcast_ref::<AnotherErrType>() == Some(&another)
    );
    println!(
        "orig_err.to_string() == another_err.to_string()? {}",
        orig.to_string() == another.to_string()
    );

    println!(
        "return_sentinel_err() == Err(SentinelError)? {}",
        return_sentinel_err() == Err(SentinelError)
    );

    let wrapped = InfoError::new("from sentinel", SentinelError);
    let wrapped_dyn: &(dyn Error + 'static) = &wrapped;
    println!(
        "wrapped sentinel downcasts to SentinelError? {}",
        wrapped_dyn.downcast_ref::<SentinelError>() == Some(&SentinelError)
    );
    println!(
        "chain::is(wrapped sentinel, SentinelError)? {}",
        chain::is(&wrapped, &SentinelError)
    );

    let cust_err = InfoError::new("custom info", orig_err());
    println!(
        "chain::find::<InfoError>(cust_err)? {}",
        chain::find::<InfoError>(&cust_err).is_some()
    );
    println!(
        "chain::find::<InfoError>(orig_err)? {}",
        chain::find::<InfoError>(&orig).is_some()
    );

    let deep = deeply_wrapped_error();
    println!(
        "deeply wrapped error contains an InfoError? {}",
        chain::find::<InfoError>(&*deep).is_some()
    );
    println!(
        "deeply wrapped error contains orig_err? {}",
        chain::is(&*deep, &orig)
    );
}

fn errs() -> Vec<BoxError> {
    vec![
        Box::new(SentinelError),
        Box::new(orig_err()),
        Box::new(AnotherErrType("an error".to_string())),
        Box::new(InfoError::new("custom info", orig_err())),
        deeply_wrapped_error(),
        Box::new(InfoError::new("other info", orig_err())),
        Box::new(InfoError::new("custom info", SentinelError)),
    ]
}

/// What we can learn about `err` without knowing its outer type.
fn interrogate(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut findings = vec![format!("original error ({}): {}", label(err), err)];

    if let Some(info_err) = chain::find::<InfoError>(err) {
        if info_err.info() == "custom info" {
            findings.push(format!("we've got a matching error: {}", info_err));
        } else {
            findings.push("we've matched our type but not our info".to_string());
        }

        if chain::is(info_err, &orig_err()) {
            findings.push("we matched our original error, even after being wrapped".to_string());
        } else if chain::is(info_err, &SentinelError) {
            findings.push("we found a wrapped sentinel error".to_string());
        }
    }

    findings
}

fn main() {
    lessons::telemetry::init();

    section("Equality, sentinels and chains");
    comparing_errors();

    section("Interrogating a list of errors");
    for err in errs() {
        for line in interrogate(&*err) {
            println!("{}", line);
        }
    }

    println!("\n=== Key Points ===");
    println!("1. Errors of different types never compare equal, whatever their text");
    println!("2. A sentinel is a value callers compare against");
    println!("3. == only sees the outermost error; chain::is walks source()");
    println!("4. chain::find recovers a concrete type and its extra methods");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_error_display_and_source() {
        let err = InfoError::new("custom info", orig_err());
        assert_eq!(err.to_string(), "info error (custom info): an error");
        assert_eq!(err.source().unwrap().to_string(), "an error");
    }

    #[test]
    fn test_deeply_wrapped_error() {
        let deep = deeply_wrapped_error();
        assert_eq!(
            deep.to_string(),
            "error: something went wrong: something else: info error (custom info): an error"
        );
        assert_eq!(chain::find::<InfoError>(&*deep).unwrap().info(), "custom info");
        assert!(chain::is(&*deep, &orig_err()));
        assert!(!chain::is(&*deep, &SentinelError));
    }

    #[test]
    fn test_interrogate_plain_errors() {
        assert_eq!(
            interrogate(&SentinelError),
            vec!["original error (SentinelError): sentinel error"]
        );
        assert_eq!(
            interrogate(&AnotherErrType("an error".to_string())),
            vec!["original error (AnotherErrType): an error"]
        );
    }

    #[test]
    fn test_interrogate_info_errors() {
        let findings = interrogate(&InfoError::new("other info", orig_err()));
        assert_eq!(findings[1], "we've matched our type but not our info");
        assert_eq!(
            findings[2],
            "we matched our original error, even after being wrapped"
        );

        let findings = interrogate(&InfoError::new("custom info", SentinelError));
        assert!(findings[1].starts_with("we've got a matching error"));
        assert_eq!(findings[2], "we found a wrapped sentinel error");
    }

    #[test]
    fn test_every_err_is_interrogated() {
        let lines: usize = errs().iter().map(|e| interrogate(&**e).len()).sum();
        // Three plain errors with one line each; four chains with three.
        assert_eq!(lines, 3 + 4 * 3);
    }
}
