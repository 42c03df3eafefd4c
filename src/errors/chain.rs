//! Walking an error chain.
//!
//! An error chain is the error itself followed by each successive
//! [`Error::source`]. The walk ends at the first error without a source.

use std::error::Error;

/// Iterator over an error and everything it wraps, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// The directly wrapped error, if there is one.
pub fn unwrap<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    err.source()
}

/// Does any error in the chain equal `target`?
///
/// Only errors of the same concrete type as `target` can match; two errors of
/// different types never compare equal even when their text is identical.
pub fn is<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    chain(err).any(|e| e.downcast_ref::<T>() == Some(target))
}

/// The first error in the chain whose concrete type is `T`.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

/// Walk the chain until `matcher` returns `Some`. First match wins.
pub fn traverse<'a, R, F>(err: &'a (dyn Error + 'static), matcher: F) -> Option<R>
where
    F: FnMut(&'a (dyn Error + 'static)) -> Option<R>,
{
    chain(err).find_map(matcher)
}

/// The innermost error of the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    // A chain always contains at least `err` itself.
    chain(err).last().unwrap_or(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CodecError, CustomError, CustomWrappedError, FileError, MessageError};

    fn nested_file_errors() -> FileError {
        FileError::new(
            "/a/nonexistant/file",
            FileError::new(
                "/another/nonexistant/file",
                FileError::new(
                    "/yet/another/nonexistant/file",
                    MessageError::new("innermost error"),
                ),
            ),
        )
    }

    #[test]
    fn test_chain_walks_outermost_first() {
        let err = MessageError::wrap("a", MessageError::wrap("b", MessageError::new("c")));
        let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["a: b: c", "b: c", "c"]);
    }

    #[test]
    fn test_unwrap_stops_at_leaf() {
        let leaf = CustomError::new("leaf");
        assert!(unwrap(&leaf).is_none());

        let wrapped = CustomWrappedError::new("outer", leaf.clone());
        let inner = unwrap(&wrapped).unwrap();
        assert_eq!(inner.downcast_ref::<CustomError>(), Some(&leaf));
        assert!(unwrap(inner).is_none());
    }

    #[test]
    fn test_is_finds_wrapped_sentinel() {
        let err = MessageError::wrap("outer", MessageError::wrap("middle", CodecError::Checksum));
        assert!(is(&err, &CodecError::Checksum));
        assert!(!is(&err, &CodecError::Header));
    }

    #[test]
    fn test_is_requires_same_type() {
        let custom = CustomError::new("i'm an error");
        let plain = MessageError::new("i'm an error");
        assert_eq!(custom.to_string(), plain.to_string());
        assert!(!is(&plain, &custom));
        assert!(is(&custom, &CustomError::new("i'm an error")));
    }

    #[test]
    fn test_find_returns_first_match() {
        let err = nested_file_errors();
        let found = find::<FileError>(&err).unwrap();
        assert_eq!(found.filename(), "/a/nonexistant/file");
        assert!(find::<CustomError>(&err).is_none());
    }

    #[test]
    fn test_traverse_reaches_inner_same_type() {
        let err = nested_file_errors();
        let found = traverse(&err, |e| {
            e.downcast_ref::<FileError>()
                .filter(|fe| fe.filename() == "/yet/another/nonexistant/file")
        })
        .unwrap();
        assert_eq!(found.to_string(), "an error occurred with file (/yet/another/nonexistant/file): innermost error");
    }

    #[test]
    fn test_traverse_checks_outermost() {
        let err = nested_file_errors();
        let found = traverse(&err, |e| e.downcast_ref::<FileError>()).unwrap();
        assert_eq!(found.filename(), "/a/nonexistant/file");
    }

    #[test]
    fn test_traverse_no_match() {
        let err = nested_file_errors();
        let found = traverse(&err, |e| e.downcast_ref::<CodecError>());
        assert!(found.is_none());
    }

    #[test]
    fn test_root_cause() {
        let err = nested_file_errors();
        assert_eq!(root_cause(&err).to_string(), "innermost error");

        let leaf = CustomError::new("alone");
        assert_eq!(root_cause(&leaf).to_string(), "alone");
    }
}
