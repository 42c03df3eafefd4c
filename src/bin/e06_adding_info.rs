//! Errors 6: Adding Information to Errors
//! An error struct can carry any extra fields the caller might need.
//!
//! Run with: cargo run --bin e06_adding_info

use lessons::errors::inspect::print_error_content_and_type;
use lessons::errors::ResolvableError;
use lessons::section;

fn known_problems() -> Vec<ResolvableError> {
    vec![
        ResolvableError::new("https://link.to.kb.article/123", "file not found"),
        ResolvableError::new("https://link.to.kb.article/456", "user not authorized"),
        ResolvableError::new("https://link.to.kb.article/789", "objects do not match"),
    ]
}

fn main() {
    lessons::telemetry::init();

    section("Errors with a knowledge-base link");
    for err in known_problems() {
        print_error_content_and_type(Some(&err));
    }

    section("Reading the extra field directly");
    for err in known_problems() {
        println!("see {} for how to fix it", err.knowledgebase_url());
    }

    println!("\n=== Key Points ===");
    println!("1. Error types are ordinary structs; add whatever fields help");
    println!("2. Callers with the concrete type can read the fields directly");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_known_problems_keep_inner_error() {
        for err in known_problems() {
            assert!(err.source().is_some());
            assert!(err.knowledgebase_url().starts_with("https://link.to.kb.article/"));
        }
    }
}
