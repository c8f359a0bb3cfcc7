//! Builtin coercers for the primitive type tags.
//!
//! Each coercer receives the already thunk-evaluated candidate value and
//! either produces a value whose runtime type matches the tag, or rejects.

use core_types::{TypeTag, Value};

use crate::descriptor::Descriptor;

/// Dispatch a descriptor against a (thunk-evaluated) value.
///
/// `None` is the failure sentinel: no descriptor accepted the value.
pub(crate) fn coerce(context: &Value, descriptor: &Descriptor, value: &Value) -> Option<Value> {
    match descriptor {
        Descriptor::Tag(tag) => coerce_tag(*tag, value),
        Descriptor::Predicate(pred) => pred(context, value).then(|| value.clone()),
        Descriptor::List(list) => list.iter().find_map(|d| coerce(context, d, value)),
    }
}

fn coerce_tag(tag: TypeTag, value: &Value) -> Option<Value> {
    match tag {
        TypeTag::String => coerce_string(value),
        TypeTag::Number => coerce_number(value),
        TypeTag::Boolean => coerce_boolean(value),
        TypeTag::Date => coerce_date(value),
        // Exact runtime-type match; no coercion, no unwrapping. Null
        // satisfies the object tag, following typeof semantics.
        TypeTag::Object | TypeTag::Symbol | TypeTag::Function | TypeTag::Undefined => {
            type_match(tag, value)
        }
    }
}

/// Succeed with the value itself iff its runtime type matches the tag.
fn type_match(tag: TypeTag, value: &Value) -> Option<Value> {
    if value.type_of() == tag.as_str() {
        Some(value.clone())
    } else {
        None
    }
}

/// Non-null object-like values get their string conversion invoked; anything
/// else only passes if it is already a string. A plain object therefore
/// coerces to `"[object Object]"` and a boxed string to its primitive.
fn coerce_string(value: &Value) -> Option<Value> {
    let candidate = if value.type_of() == "object" && !value.is_null() {
        Value::string(value.to_display_string())
    } else {
        value.to_primitive()
    };
    type_match(TypeTag::String, &candidate)
}

/// Unwrap boxed primitives, then check for a number. NaN and infinities are
/// accepted: only the runtime type is checked.
fn coerce_number(value: &Value) -> Option<Value> {
    type_match(TypeTag::Number, &value.to_primitive())
}

/// Unwrap boxed primitives, then check for a boolean.
fn coerce_boolean(value: &Value) -> Option<Value> {
    type_match(TypeTag::Boolean, &value.to_primitive())
}

/// A valid date is returned unchanged; otherwise the value's primitive must
/// be a finite, non-NaN number, which becomes the millisecond timestamp of a
/// new date. Everything else fails, invalid dates included.
fn coerce_date(value: &Value) -> Option<Value> {
    if let Value::Date(d) = value {
        if d.is_valid() {
            return Some(value.clone());
        }
    }
    match value.to_primitive() {
        Value::Number(ms) if ms.is_finite() => Some(Value::date_from_millis(ms)),
        _ => None,
    }
}
