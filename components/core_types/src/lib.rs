//! Core runtime value types for the normalizer.
//!
//! This crate provides the foundational types for value normalization,
//! including the dynamic value representation, the closed set of primitive
//! type tags, and the library error type.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of dynamically-typed values
//! - [`TypeTag`] - The closed set of primitive type tags
//! - [`DateValue`] - Millisecond-timestamp date values
//! - [`SymbolValue`] - Unique symbol values
//! - [`NormalizeError`] - Errors for unparseable tags and bad calls
//!
//! # Examples
//!
//! ```
//! use core_types::{TypeTag, Value};
//!
//! let num = Value::number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let tag: TypeTag = "number".parse().unwrap();
//! assert_eq!(tag, TypeTag::Number);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod date;
mod error;
mod symbol;
mod tag;
mod value;

pub use date::DateValue;
pub use error::NormalizeError;
pub use symbol::SymbolValue;
pub use tag::TypeTag;
pub use value::{FunctionData, ObjectData, Value};
