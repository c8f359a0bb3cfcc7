//! Normalization entry points.

use core_types::{TypeTag, Value};

use crate::coerce::coerce;
use crate::descriptor::Descriptor;

/// Normalize `value` against `descriptor` with an undefined calling context.
///
/// If `value` is a function it is treated as a thunk: invoked with the
/// context and `args`, and the invocation result is coerced instead. The
/// one exception is a top-level `function` tag, which accepts the function
/// unevaluated so callers can ask for a function value itself.
///
/// Returns `Some(coerced)` on success and `None` when no descriptor
/// accepted the value.
///
/// # Examples
///
/// ```
/// use core_types::{TypeTag, Value};
/// use normalizer::normalize;
///
/// let result = normalize(&TypeTag::Number.into(), Value::boxed_number(5.0), vec![]);
/// assert_eq!(result, Some(Value::number(5.0)));
/// ```
pub fn normalize(descriptor: &Descriptor, value: Value, args: Vec<Value>) -> Option<Value> {
    normalize_with(&Value::Undefined, descriptor, value, args)
}

/// Normalize with an explicit calling context.
///
/// The context is forwarded to thunk invocations and to predicate
/// descriptors, enabling context-dependent coercers.
pub fn normalize_with(
    context: &Value,
    descriptor: &Descriptor,
    value: Value,
    args: Vec<Value>,
) -> Option<Value> {
    let value = match value {
        // A function is a thunk unless the caller explicitly asked for a
        // function value. The exception applies at the top level only: a
        // function tag nested in a list does not suppress evaluation.
        Value::Function(f) => {
            if matches!(descriptor, Descriptor::Tag(TypeTag::Function)) {
                Value::Function(f)
            } else {
                f.invoke(context.clone(), args)
            }
        }
        other => other,
    };
    coerce(context, descriptor, &value)
}

macro_rules! tag_entry_points {
    ($($(#[$doc:meta])* $name:ident, $with_name:ident => $tag:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(value: Value, args: Vec<Value>) -> Option<Value> {
                normalize(&Descriptor::Tag(TypeTag::$tag), value, args)
            }

            #[doc = concat!("Context-forwarding variant of [`", stringify!($name), "`].")]
            pub fn $with_name(context: &Value, value: Value, args: Vec<Value>) -> Option<Value> {
                normalize_with(context, &Descriptor::Tag(TypeTag::$tag), value, args)
            }
        )*
    };
}

tag_entry_points! {
    /// [`normalize`] pre-bound to the `object` tag.
    object, object_with => Object;
    /// [`normalize`] pre-bound to the `number` tag.
    number, number_with => Number;
    /// [`normalize`] pre-bound to the `string` tag.
    string, string_with => String;
    /// [`normalize`] pre-bound to the `symbol` tag.
    symbol, symbol_with => Symbol;
    /// [`normalize`] pre-bound to the `boolean` tag.
    boolean, boolean_with => Boolean;
    /// [`normalize`] pre-bound to the `date` tag.
    date, date_with => Date;
    /// [`normalize`] pre-bound to the `function` tag.
    function, function_with => Function;
    /// [`normalize`] pre-bound to the `undefined` tag.
    undefined, undefined_with => Undefined;
}
