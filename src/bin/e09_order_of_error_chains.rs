//! Errors 9: Order Within an Error Chain
//! Where an error sits in the chain rarely matters, unless a type repeats.
//!
//! Run with: cargo run --bin e09_order_of_error_chains

use lessons::errors::inspect::print_debug_file_and_custom_wrapped_error;
use lessons::errors::{chain, BoxError, CustomWrappedError, FileError, MessageError, WrapErr};
use lessons::section;

const FILENAME: &str = "/a/nonexistant/file";
const PARSE_MESSAGE: &str = "contents malformed";
const PARSE_ERROR: &str = "contents in an unknown format";
const INNERMOST_FILE: &str = "/yet/another/nonexistant/file";

fn parse_error() -> MessageError {
    MessageError::new(PARSE_ERROR)
}

fn errors_to_debug() -> Vec<BoxError> {
    vec![
        // FileError outside, CustomWrappedError inside.
        Box::new(FileError::new(
            FILENAME,
            CustomWrappedError::new(PARSE_MESSAGE, parse_error()),
        )),
        // CustomWrappedError outside, FileError inside.
        Box::new(CustomWrappedError::new(
            PARSE_MESSAGE,
            FileError::new(FILENAME, parse_error()),
        )),
        // Errors with nothing special about them.
        Box::new(parse_error()),
        Box::new(parse_error().wrap_err("outer error")),
    ]
}

fn nested_file_errors() -> FileError {
    FileError::new(
        "/a/nonexistant/file",
        FileError::new(
            "/another/nonexistant/file",
            FileError::new(INNERMOST_FILE, MessageError::new("innermost error")),
        ),
    )
}

/// The `FileError` for `filename`, however deep it is buried.
fn find_file_error<'a>(err: &'a FileError, filename: &str) -> Option<&'a FileError> {
    chain::traverse(err, |e| {
        e.downcast_ref::<FileError>()
            .filter(|file_err| file_err.filename() == filename)
    })
}

fn main() {
    lessons::telemetry::init();

    section("Nesting order does not matter");
    for err in errors_to_debug() {
        print_debug_file_and_custom_wrapped_error(&*err);
    }

    section("Repeated types: only the first is found");
    let nested = nested_file_errors();
    print_debug_file_and_custom_wrapped_error(&nested);

    section("Traversing the chain with a predicate");
    match find_file_error(&nested, INNERMOST_FILE) {
        Some(file_err) => print_debug_file_and_custom_wrapped_error(file_err),
        None => println!("no FileError for {}", INNERMOST_FILE),
    }

    println!("\n=== Key Points ===");
    println!("1. chain::find returns the first error of a type, wherever it is");
    println!("2. With several errors of one type, only the outermost is found");
    println!("3. chain::traverse with a predicate reaches the others");
}
