//! Error types and helpers used by the error-handling examples.
//!
//! - [`types`]: the custom error types, all shaped `{context, inner error}`
//! - [`chain`]: walking `source()` chains (unwrap, `is`, `find`, traverse)
//! - [`inspect`]: printing an error together with its concrete type

pub mod chain;
pub mod inspect;
pub mod types;

pub use types::{
    BoxError, CodecError, CustomError, CustomWrappedError, FileError, MessageError,
    ResolvableError, WrapErr,
};
