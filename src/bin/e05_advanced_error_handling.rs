//! Errors 5: Comparing and Matching Errors
//! Equality pitfalls, sentinel values, downcasting, and chain-aware matching.
//!
//! Run with: cargo run --bin e05_advanced_error_handling

use std::io;

use anyhow::Context as _;
use lessons::errors::inspect::{content_and_type, print_error_content_and_type};
use lessons::errors::{chain, BoxError, CodecError, CustomError, CustomWrappedError, MessageError};
use lessons::section;

const ERR_TEXT: &str = "i'm an error";

fn basic_equality() {
    section("Basic equality");
    let err1 = MessageError::new(ERR_TEXT);
    let err2 = MessageError::new(ERR_TEXT);

    // Same text, but comparing text is fragile: messages get reworded.
    println!(
        "{} == {}? {}",
        err1,
        err2,
        err1.to_string() == err2.to_string()
    );

    // They are still two distinct values.
    println!("{} is {}? {}", err1, err2, std::ptr::eq(&err1, &err2));
    println!("MessageError: {:p}\nMessageError: {:p}", &err1, &err2);
}

fn sentinel_errors() {
    section("Sentinel errors");
    // A library exports values that callers compare against.
    print_error_content_and_type(Some(&CodecError::Header));
    print_error_content_and_type(Some(&CodecError::Checksum));

    // The standard library does the same with io::ErrorKind.
    let not_found = io::Error::new(io::ErrorKind::NotFound, "no such file");
    println!(
        "{}: kind == NotFound? {}",
        content_and_type(Some(&not_found)),
        not_found.kind() == io::ErrorKind::NotFound
    );
}

fn custom_error_types() {
    section("Custom error types");
    let plain = MessageError::new(ERR_TEXT);
    let custom = CustomError::new(ERR_TEXT);

    // Different types never match, whatever their text says.
    println!(
        "{} (CustomError) matches {} (MessageError)? {}",
        custom,
        plain,
        chain::is(&plain, &custom)
    );
}

fn downcasting() {
    section("Downcasting");
    let custom: BoxError = Box::new(CustomError::new(ERR_TEXT));

    // Behind dyn Error we can only ask whether it is a particular type.
    let asserted = custom.downcast_ref::<CustomError>();
    println!("{}: ok? {}", content_and_type(Some(&*custom)), asserted.is_some());
    if let Some(custom_err) = asserted {
        println!("{}", custom_err.custom_func());
    }

    // Once wrapped, the outer error is not a CustomError.
    let wrapped: BoxError = Box::new(MessageError::wrap("outer", custom));
    print_error_content_and_type(Some(&*wrapped));
    println!(
        "{}: ok? {}",
        content_and_type(Some(&*wrapped)),
        wrapped.downcast_ref::<CustomError>().is_some()
    );

    // Unwrap one level first and the downcast succeeds.
    if let Some(unwrapped) = chain::unwrap(&*wrapped) {
        let asserted = unwrapped.downcast_ref::<CustomError>();
        println!("{}: ok? {}", content_and_type(Some(unwrapped)), asserted.is_some());
        if let Some(custom_err) = asserted {
            println!("{}", custom_err.custom_func());
        }
    }
}

fn errors_is() {
    section("chain::is");
    let err1 = CustomError::new(ERR_TEXT);
    let err2 = MessageError::wrap("wrapped", err1.clone());
    let custom_err = CustomError::new("custom");
    let wrapped_custom_err = CustomWrappedError::new("wrapped", custom_err.clone());

    // true: err1 sits inside err2.
    println!("{}", chain::is(&err2, &err1));
    // true: the unwrapped error is err1.
    println!("{}", chain::unwrap(&err2).is_some_and(|inner| chain::is(inner, &err1)));
    // true: wrapping a custom error in another custom type.
    println!("{}", chain::is(&wrapped_custom_err, &custom_err));
    // false: a CustomError is never equal to a sentinel of another type.
    println!("{}", chain::is(&custom_err, &CodecError::Header));
}

fn sample_errors() -> Vec<BoxError> {
    let wrapped_custom = MessageError::wrap("wrapped custom error", CustomError::new(ERR_TEXT));
    let doubly_wrapped = MessageError::wrap(
        "double wrapped",
        MessageError::wrap("wrapped custom error", CustomError::new(ERR_TEXT)),
    );

    vec![
        Box::new(CustomError::new(ERR_TEXT)),
        Box::new(MessageError::new(ERR_TEXT)),
        Box::new(wrapped_custom),
        ERR_TEXT.into(),
        Box::new(doubly_wrapped),
    ]
}

fn errors_as() {
    section("chain::find");
    for err in sample_errors() {
        match chain::find::<CustomError>(&*err) {
            Some(custom_err) => {
                print!("CustomError found: calling custom_func() ");
                print_error_content_and_type(Some(&*err));
                println!("{}", custom_err.custom_func());
            }
            None => {
                print!("not a CustomError: ");
                print_error_content_and_type(Some(&*err));
            }
        }
    }
}

fn anyhow_chains() -> anyhow::Result<()> {
    section("The same ideas with anyhow");
    let result: anyhow::Result<()> = Err(CustomError::new(ERR_TEXT))
        .context("loading settings")
        .context("starting up");

    let err = match result {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    // {} shows the outermost context, {:#} the whole chain.
    println!("{}", err);
    println!("{:#}", err);
    for (depth, cause) in err.chain().enumerate() {
        println!("  {}: {}", depth, cause);
    }

    if let Some(custom_err) = err.downcast_ref::<CustomError>() {
        println!("{}", custom_err.custom_func());
    }
    println!("root cause: {}", err.root_cause());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    lessons::telemetry::init();

    basic_equality();
    sentinel_errors();
    custom_error_types();
    downcasting();
    errors_is();
    errors_as();
    anyhow_chains()?;

    println!("\n=== Key Points ===");
    println!("1. Compare errors by type or variant, never by message text");
    println!("2. downcast_ref only looks at the outermost error");
    println!("3. chain::is / chain::find walk the whole source() chain");
    println!("4. anyhow's context() builds the same kind of chain for applications");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_errors_containing_custom() {
        let found = sample_errors()
            .iter()
            .filter(|err| chain::find::<CustomError>(&***err).is_some())
            .count();
        assert_eq!(found, 3);
    }

    #[test]
    fn test_anyhow_downcast_reaches_inner_error() {
        let err = anyhow::Error::new(CustomError::new(ERR_TEXT)).context("outer");
        assert!(err.downcast_ref::<CustomError>().is_some());
        assert_eq!(format!("{:#}", err), "outer: i'm an error");
    }
}
