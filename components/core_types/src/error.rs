//! Error types for the value model.

use thiserror::Error;

/// Errors raised by the value model and descriptor parsing.
///
/// Coercion *mismatches* are never errors: they are reported as an absent
/// result by the normalizer. This type covers the programmer-error cases
/// that should surface loudly instead of failing a lookup silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A string did not name one of the eight recognized type tags.
    #[error(
        "unknown type tag `{0}`: expected one of object, number, string, \
         symbol, boolean, date, function, undefined"
    )]
    UnknownTag(String),

    /// A non-function value was invoked.
    #[error("value of type `{0}` is not callable")]
    NotCallable(&'static str),
}
