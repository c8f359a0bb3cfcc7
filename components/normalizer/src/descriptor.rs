//! Shape descriptors.

use std::fmt;
use std::rc::Rc;

use core_types::{NormalizeError, TypeTag, Value};

/// A predicate over candidate values.
///
/// The first argument is the forwarded calling context, the second the
/// candidate (already thunk-evaluated) value. Returning `true` accepts the
/// candidate as-is.
pub type PredicateFn = dyn Fn(&Value, &Value) -> bool;

/// The specification of what shape a value must end up in.
///
/// A descriptor is one of:
/// - a primitive type tag from the closed set,
/// - a predicate accepting or rejecting the candidate value,
/// - an ordered list of descriptors, tried left to right.
///
/// The tagged representation makes invalid descriptors unrepresentable;
/// the only fallible construction is [`Descriptor::parse`], which rejects
/// unknown tag names with a descriptive error.
///
/// # Examples
///
/// ```
/// use core_types::TypeTag;
/// use normalizer::Descriptor;
///
/// let tag = Descriptor::parse("string").unwrap();
/// assert_eq!(tag, Descriptor::Tag(TypeTag::String));
///
/// assert!(Descriptor::parse("bigint").is_err());
/// ```
#[derive(Clone)]
pub enum Descriptor {
    /// A primitive type tag.
    Tag(TypeTag),
    /// A custom predicate, invoked with the forwarded context.
    Predicate(Rc<PredicateFn>),
    /// Ordered alternatives, tried left to right until one matches.
    List(Vec<Descriptor>),
}

impl Descriptor {
    /// Descriptor for a primitive type tag.
    pub fn tag(tag: TypeTag) -> Self {
        Descriptor::Tag(tag)
    }

    /// Descriptor wrapping a custom predicate.
    pub fn predicate<F>(pred: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + 'static,
    {
        Descriptor::Predicate(Rc::new(pred))
    }

    /// Descriptor trying each alternative in order.
    pub fn list(descriptors: Vec<Descriptor>) -> Self {
        Descriptor::List(descriptors)
    }

    /// Parse a tag-name descriptor.
    ///
    /// Names outside the closed tag set are a programmer error and surface
    /// as [`NormalizeError::UnknownTag`] rather than failing every match
    /// silently.
    pub fn parse(name: &str) -> Result<Self, NormalizeError> {
        Ok(Descriptor::Tag(name.parse::<TypeTag>()?))
    }
}

impl From<TypeTag> for Descriptor {
    fn from(tag: TypeTag) -> Self {
        Descriptor::Tag(tag)
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Descriptor::Tag(a), Descriptor::Tag(b)) => a == b,
            // Predicates compare by identity
            (Descriptor::Predicate(a), Descriptor::Predicate(b)) => Rc::ptr_eq(a, b),
            (Descriptor::List(a), Descriptor::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Descriptor::Predicate(_) => write!(f, "Predicate(...)"),
            Descriptor::List(list) => f.debug_tuple("List").field(list).finish(),
        }
    }
}
