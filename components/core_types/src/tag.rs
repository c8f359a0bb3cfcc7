//! The closed set of primitive type tags.

use std::fmt;
use std::str::FromStr;

use crate::NormalizeError;

/// A primitive type tag.
///
/// These are the eight shapes a value can be normalized into. The set is
/// closed: anything else is a descriptor-construction error, not a
/// coercion failure.
///
/// # Examples
///
/// ```
/// use core_types::TypeTag;
///
/// let tag: TypeTag = "string".parse().unwrap();
/// assert_eq!(tag.as_str(), "string");
/// assert!("bigint".parse::<TypeTag>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Matches values whose runtime type is object. Note that `Null`
    /// satisfies this tag, following `typeof null`.
    Object,
    /// Matches number values, including NaN and infinities.
    Number,
    /// Matches string values.
    String,
    /// Matches symbol values.
    Symbol,
    /// Matches boolean values.
    Boolean,
    /// Matches valid date values.
    Date,
    /// Matches function values.
    Function,
    /// Matches the undefined value.
    Undefined,
}

impl TypeTag {
    /// Every tag in the closed set, in declaration order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Object,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Boolean,
        TypeTag::Date,
        TypeTag::Function,
        TypeTag::Undefined,
    ];

    /// The tag's canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Object => "object",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Boolean => "boolean",
            TypeTag::Date => "date",
            TypeTag::Function => "function",
            TypeTag::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(TypeTag::Object),
            "number" => Ok(TypeTag::Number),
            "string" => Ok(TypeTag::String),
            "symbol" => Ok(TypeTag::Symbol),
            "boolean" => Ok(TypeTag::Boolean),
            "date" => Ok(TypeTag::Date),
            "function" => Ok(TypeTag::Function),
            "undefined" => Ok(TypeTag::Undefined),
            other => Err(NormalizeError::UnknownTag(other.to_string())),
        }
    }
}
