//! Errors 2: Checking Errors
//! Inspect every `Result`, and hand failures back to the caller with `?`.
//!
//! Run with: cargo run --bin e02_checking_errors

use lessons::errors::inspect::type_label;
use lessons::errors::MessageError;
use lessons::section;

fn i_return_an_error() -> Result<(), MessageError> {
    Err(MessageError::new("i'm the returned error"))
}

fn i_also_return_an_error() -> Result<(), MessageError> {
    Err(MessageError::new("i'm also a returned error"))
}

fn i_return_no_error() -> Result<(), MessageError> {
    Ok(())
}

fn check_error(result: Result<(), MessageError>) -> String {
    match result {
        Ok(()) => "no error returned!".to_string(),
        Err(err) => format!("an error was returned: {}: {}", err, type_label(&err)),
    }
}

/// Stops at the first failure and returns it unmodified.
fn i_do_stuff() -> Result<(), MessageError> {
    i_return_an_error()?;
    i_also_return_an_error()?;
    i_return_an_error()?;
    Ok(())
}

fn main() {
    lessons::telemetry::init();

    section("Checking results");
    println!("{}", check_error(i_return_no_error()));
    println!("{}", check_error(i_return_an_error()));

    section("Propagating with ?");
    println!("{}", check_error(i_do_stuff()));

    println!("\n=== Key Points ===");
    println!("1. Ok(()) means nothing went wrong");
    println!("2. ? returns the error to the caller immediately");
    println!("3. The compiler warns about an unused Result");
}
