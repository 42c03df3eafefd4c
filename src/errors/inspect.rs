//! Printing errors along with what they really are.

use std::error::Error;
use std::io;

use super::chain;
use super::{CodecError, CustomError, CustomWrappedError, FileError, MessageError, ResolvableError};
use crate::context::ContextError;

macro_rules! label_known_types {
    ($err:expr, $($ty:ty => $label:expr),+ $(,)?) => {
        $(
            if $err.is::<$ty>() {
                return $label;
            }
        )+
    };
}

/// Short name of the concrete type behind a `dyn Error`.
///
/// Only types this crate knows about can be named; anything else is reported
/// as `dyn Error`.
pub fn type_label(err: &(dyn Error + 'static)) -> &'static str {
    label_known_types!(err,
        MessageError => "MessageError",
        CustomError => "CustomError",
        CustomWrappedError => "CustomWrappedError",
        FileError => "FileError",
        ResolvableError => "ResolvableError",
        CodecError => "CodecError",
        ContextError => "ContextError",
        io::Error => "io::Error",
        serde_json::Error => "serde_json::Error",
    );
    "dyn Error"
}

/// `"<text>: <type>"`, or `"<nil>"` when there is no error.
pub fn content_and_type(err: Option<&(dyn Error + 'static)>) -> String {
    match err {
        Some(err) => format!("{}: {}", err, type_label(err)),
        None => "<nil>".to_string(),
    }
}

pub fn print_error_content_and_type(err: Option<&(dyn Error + 'static)>) {
    println!("{}", content_and_type(err));
}

/// Report what can be learned about an error that may contain a
/// [`FileError`] and/or a [`CustomWrappedError`].
///
/// Only the first error of each type is found, so when a chain holds several
/// `FileError`s the inner ones are never reported here.
pub fn debug_file_and_custom_wrapped_error(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut lines = vec![format!("original error text: {}", err)];

    if let Some(file_err) = chain::find::<FileError>(err) {
        lines.push(format!(
            "we know the error occurred with this file: {}",
            file_err.filename()
        ));
    }

    if let Some(custom_err) = chain::find::<CustomWrappedError>(err) {
        lines.push(format!(
            "we know we had the following message: {}",
            custom_err.message()
        ));
    }

    if let Some(unwrapped) = chain::unwrap(err) {
        lines.push(format!("this is the unwrapped error we got: {}", unwrapped));
    }

    lines.push("===".to_string());
    lines
}

pub fn print_debug_file_and_custom_wrapped_error(err: &(dyn Error + 'static)) {
    for line in debug_file_and_custom_wrapped_error(err) {
        println!("{}", line);
    }
}
