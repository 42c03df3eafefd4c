use thiserror::Error;

/// Owned inner error. Every wrapper type below stores its cause this way.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A plain message, optionally wrapping another error.
///
/// Displays as `message` on its own, or `message: inner` when wrapping.
#[derive(Error, Debug)]
#[error("{}", render(.message, .source))]
pub struct MessageError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

fn render(message: &str, source: &Option<BoxError>) -> String {
    match source {
        Some(inner) => format!("{}: {}", message, inner),
        None => message.to_string(),
    }
}

impl MessageError {
    pub fn new(message: impl Into<String>) -> Self {
        MessageError {
            message: message.into(),
            source: None,
        }
    }

    pub fn wrap(message: impl Into<String>, inner: impl Into<BoxError>) -> Self {
        MessageError {
            message: message.into(),
            source: Some(inner.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Wrap any error value in a [`MessageError`] carrying extra context.
pub trait WrapErr {
    fn wrap_err(self, message: impl Into<String>) -> MessageError;
}

impl<E> WrapErr for E
where
    E: Into<BoxError>,
{
    fn wrap_err(self, message: impl Into<String>) -> MessageError {
        MessageError::wrap(message, self)
    }
}

/// A leaf error with a method of its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{msg}")]
pub struct CustomError {
    msg: String,
}

impl CustomError {
    pub fn new(msg: impl Into<String>) -> Self {
        CustomError { msg: msg.into() }
    }

    /// Only reachable once you hold a `CustomError`, not a `dyn Error`.
    pub fn custom_func(&self) -> String {
        format!("from custom error func: {}", self)
    }
}

#[derive(Error, Debug)]
#[error("{msg}: {source}")]
pub struct CustomWrappedError {
    msg: String,
    source: BoxError,
}

impl CustomWrappedError {
    pub fn new(msg: impl Into<String>, inner: impl Into<BoxError>) -> Self {
        CustomWrappedError {
            msg: msg.into(),
            source: inner.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.msg
    }

    pub fn custom_func(&self) -> String {
        format!("from custom wrapped error func: {}", self)
    }
}

/// An error associated with a file name.
#[derive(Error, Debug)]
#[error("an error occurred with file ({filename}): {source}")]
pub struct FileError {
    filename: String,
    source: BoxError,
}

impl FileError {
    pub fn new(filename: impl Into<String>, inner: impl Into<BoxError>) -> Self {
        FileError {
            filename: filename.into(),
            source: inner.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// An error that points at a knowledge-base article explaining the fix.
#[derive(Error, Debug)]
#[error("resolvable error: '{source}', see: {knowledgebase_url}")]
pub struct ResolvableError {
    knowledgebase_url: String,
    source: BoxError,
}

impl ResolvableError {
    pub fn new(knowledgebase_url: impl Into<String>, inner: impl Into<BoxError>) -> Self {
        ResolvableError {
            knowledgebase_url: knowledgebase_url.into(),
            source: inner.into(),
        }
    }

    pub fn knowledgebase_url(&self) -> &str {
        &self.knowledgebase_url
    }
}

/// Sentinel errors: callers compare against these variants directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid header")]
    Header,
    #[error("invalid checksum")]
    Checksum,
}
