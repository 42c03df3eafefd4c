//! Errors 4: Custom Error Types
//! Your own types become errors by implementing `std::error::Error`.
//!
//! Run with: cargo run --bin e04_custom_error_type

use lessons::errors::inspect::print_error_content_and_type;
use lessons::errors::{chain, CustomError, CustomWrappedError};
use lessons::section;

fn main() {
    lessons::telemetry::init();

    section("A custom error");
    // thiserror derives Display and Error; the type name stays visible.
    let err1 = CustomError::new("i'm a custom error");
    print_error_content_and_type(Some(&err1));

    section("A custom wrapping error");
    // Wrapping works for any type that exposes its inner error via source().
    let err2 = CustomWrappedError::new("i'm a custom wrapped error", err1.clone());
    print_error_content_and_type(Some(&err2));

    // Unwrapping gets the CustomError back.
    print_error_content_and_type(chain::unwrap(&err2));

    // A CustomError wraps nothing.
    print_error_content_and_type(chain::unwrap(&err1));

    println!("\n=== Key Points ===");
    println!("1. #[derive(Error)] + #[error(\"...\")] gives Display and Error");
    println!("2. A field named source (or marked #[source]) becomes the inner error");
    println!("3. Leaf errors return None from source()");
}
