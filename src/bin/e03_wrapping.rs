//! Errors 3: Wrapping and Unwrapping
//! Add context by wrapping one error in another, and get it back later.
//!
//! Run with: cargo run --bin e03_wrapping

use std::error::Error;

use lessons::errors::inspect::print_error_content_and_type;
use lessons::errors::{chain, MessageError, WrapErr};
use lessons::section;

fn basic_wrapping_and_unwrapping() {
    section("Basic wrapping");
    let err1 = MessageError::new("i tried doing something");
    print_error_content_and_type(Some(&err1));

    // Printed, the wrapper looks like plain concatenation. The inner error is
    // still a separate value reachable through source().
    let err2 = err1.wrap_err("i can't do that dave");
    print_error_content_and_type(Some(&err2));

    let unwrapped = chain::unwrap(&err2);
    print_error_content_and_type(unwrapped);

    // The start of the chain has nothing left to unwrap.
    let unwrapped = unwrapped.and_then(chain::unwrap);
    print_error_content_and_type(unwrapped);
}

fn wrap_all(base: MessageError, messages: &[&str]) -> MessageError {
    messages
        .iter()
        .fold(base, |err, message| err.wrap_err(*message))
}

fn multiple_wrapping_and_unwrapping() {
    section("Multiple wrapping");
    let messages = ["unauthorized user", "cannot open file", "access denied"];
    let wrapped = wrap_all(MessageError::new("base error"), &messages);

    print_error_content_and_type(Some(&wrapped));

    // Walk back down, one source() at a time.
    let mut current: &(dyn Error + 'static) = &wrapped;
    while let Some(inner) = chain::unwrap(current) {
        print_error_content_and_type(Some(inner));
        current = inner;
    }
}

fn main() {
    lessons::telemetry::init();

    basic_wrapping_and_unwrapping();
    multiple_wrapping_and_unwrapping();

    println!("\n=== Key Points ===");
    println!("1. Wrapping keeps the original error intact inside the new one");
    println!("2. source() is the unwrap step; None marks the end of the chain");
    println!("3. The last wrap is the outermost error");
}
