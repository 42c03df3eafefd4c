//! Errors 1: Constructing Errors
//! Errors are ordinary values. A fallible function returns `Result`.
//!
//! Run with: cargo run --bin e01_basic_errors

use lessons::errors::inspect::print_error_content_and_type;
use lessons::errors::{BoxError, MessageError};
use lessons::section;

fn i_return_an_error() -> Result<(), MessageError> {
    Err(MessageError::new("i'm a returned error"))
}

// The value and the error travel together in one `Result`; you get one or the other.
fn i_also_return_an_error() -> Result<bool, MessageError> {
    Err(MessageError::new("i'm also a returned error"))
}

fn main() {
    lessons::telemetry::init();

    section("Constructing an error");
    let err = MessageError::new("hello, i'm an error");
    print_error_content_and_type(Some(&err));

    // Any string converts into a boxed error. The concrete type is hidden
    // behind `dyn Error` after that.
    let boxed: BoxError = String::from("hello, i'm also an error").into();
    print_error_content_and_type(Some(&*boxed));

    section("Returning errors");
    if let Err(err) = i_return_an_error() {
        print_error_content_and_type(Some(&err));
    }

    match i_also_return_an_error() {
        Ok(value) => println!("got a value: {}", value),
        Err(err) => print_error_content_and_type(Some(&err)),
    }

    println!("\n=== Key Points ===");
    println!("1. An error is any type implementing std::error::Error");
    println!("2. Result<T, E> carries either the value or the error, never both");
    println!("3. Box<dyn Error> erases the concrete type");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons::errors::inspect::content_and_type;

    #[test]
    fn test_functions_return_errors() {
        assert_eq!(
            i_return_an_error().unwrap_err().to_string(),
            "i'm a returned error"
        );
        assert!(i_also_return_an_error().is_err());
    }

    #[test]
    fn test_boxed_string_hides_its_type() {
        let boxed: BoxError = String::from("hello, i'm also an error").into();
        assert_eq!(
            content_and_type(Some(&*boxed)),
            "hello, i'm also an error: dyn Error"
        );
    }
}
