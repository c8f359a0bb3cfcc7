//! Runtime value normalization.
//!
//! Given a target shape [`Descriptor`] (a primitive type tag, a predicate,
//! or an ordered list of descriptors) and a candidate [`Value`], the
//! normalizer attempts to coerce the value into something satisfying that
//! descriptor, optionally by invoking the value itself as a thunk and/or
//! unwrapping boxed primitives.
//!
//! The failure sentinel is `None`: a `Some(Value::Undefined)` or
//! `Some(Value::Null)` is a legitimate success, distinguishable from "no
//! descriptor accepted this value".
//!
//! # Examples
//!
//! ```
//! use core_types::{TypeTag, Value};
//! use normalizer::{normalize, Descriptor};
//!
//! // A matching value passes through unchanged.
//! let result = normalize(&TypeTag::String.into(), Value::string("hi"), vec![]);
//! assert_eq!(result, Some(Value::string("hi")));
//!
//! // A thunk is invoked first, then its result is coerced.
//! let thunk = Value::thunk(|| Value::string("produced"));
//! let result = normalize(&TypeTag::String.into(), thunk, vec![]);
//! assert_eq!(result, Some(Value::string("produced")));
//!
//! // Descriptor lists try alternatives left to right.
//! let either = Descriptor::list(vec![
//!     TypeTag::Number.into(),
//!     TypeTag::String.into(),
//! ]);
//! assert_eq!(normalize(&either, Value::string("s"), vec![]), Some(Value::string("s")));
//! assert_eq!(normalize(&either, Value::Null, vec![]), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod coerce;
mod descriptor;
mod normalize;

pub use descriptor::{Descriptor, PredicateFn};
pub use normalize::{
    boolean, boolean_with, date, date_with, function, function_with, normalize, normalize_with,
    number, number_with, object, object_with, string, string_with, symbol, symbol_with,
    undefined, undefined_with,
};

// Re-export the value model for convenience
pub use core_types::{DateValue, NormalizeError, SymbolValue, TypeTag, Value};
