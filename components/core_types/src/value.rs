//! Dynamic value representation.
//!
//! This module provides the core `Value` enum that represents every runtime
//! value the normalizer can see: primitives, boxed primitives, dates,
//! symbols, functions, and plain objects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{DateValue, NormalizeError, SymbolValue};

/// Internal object data.
///
/// A plain object is a property map, optionally carrying a boxed primitive
/// in the spirit of a `[[PrimitiveValue]]` internal slot. Boxed objects are
/// how wrapper values (a number-in-an-object, a string-in-an-object) travel
/// through the normalizer before being unwrapped.
#[derive(Debug)]
pub struct ObjectData {
    /// Object properties.
    pub properties: HashMap<String, Value>,
    /// The boxed primitive, if this object wraps one.
    pub primitive: Option<Value>,
}

/// Internal function data.
///
/// The closure receives the forwarded calling context as its first argument
/// and the pass-through extra arguments as its second.
pub struct FunctionData {
    func: Box<dyn Fn(Value, Vec<Value>) -> Value>,
}

impl FunctionData {
    /// Invoke the underlying closure.
    pub fn invoke(&self, context: Value, args: Vec<Value>) -> Value {
        (self.func)(context, args)
    }
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData").finish()
    }
}

/// A dynamically-typed runtime value.
///
/// Primitive values are stored inline; objects and functions are referenced
/// through `Rc` so clones share identity (two clones of the same object
/// compare equal, two structurally identical objects do not).
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let n = Value::number(42.0);
/// assert_eq!(n.type_of(), "number");
/// assert!(n.is_truthy());
///
/// let boxed = Value::boxed_number(5.0);
/// assert_eq!(boxed.type_of(), "object");
/// assert_eq!(boxed.to_primitive(), Value::number(5.0));
/// ```
#[derive(Clone)]
pub enum Value {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number (IEEE 754 double). NaN and infinities are ordinary numbers.
    Number(f64),
    /// A string.
    String(String),
    /// A symbol.
    Symbol(SymbolValue),
    /// A plain object, possibly boxing a primitive.
    Object(Rc<RefCell<ObjectData>>),
    /// A date value.
    Date(DateValue),
    /// A function, usable as a deferred producer (thunk) of the value to
    /// coerce, or as a value in its own right under the `function` tag.
    Function(Rc<FunctionData>),
    /// An arbitrary precision integer. No primitive tag matches it; only
    /// predicate descriptors can accept one.
    BigInt(BigInt),
}

impl Value {
    /// Create the undefined value.
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create the null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value.
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create a number value.
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value.
    pub fn symbol(sym: SymbolValue) -> Self {
        Value::Symbol(sym)
    }

    /// Create an empty plain object.
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            primitive: None,
        })))
    }

    /// Create an object boxing the given primitive.
    pub fn boxed(primitive: Value) -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            primitive: Some(primitive),
        })))
    }

    /// Create a boxed number object.
    pub fn boxed_number(v: f64) -> Self {
        Value::boxed(Value::Number(v))
    }

    /// Create a boxed string object.
    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::boxed(Value::String(s.into()))
    }

    /// Create a boxed boolean object.
    pub fn boxed_boolean(v: bool) -> Self {
        Value::boxed(Value::Boolean(v))
    }

    /// Create a date value.
    pub fn date(d: DateValue) -> Self {
        Value::Date(d)
    }

    /// Create a date value from milliseconds since the epoch.
    pub fn date_from_millis(ms: f64) -> Self {
        Value::Date(DateValue::from_millis(ms))
    }

    /// Create a function value.
    ///
    /// The closure receives the forwarded calling context and the extra
    /// arguments passed through the normalizer.
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(Value, Vec<Value>) -> Value + 'static,
    {
        Value::Function(Rc::new(FunctionData {
            func: Box::new(func),
        }))
    }

    /// Create a zero-argument thunk that ignores context and arguments.
    pub fn thunk<F>(f: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Value::function(move |_context, _args| f())
    }

    /// Create a BigInt value.
    pub fn bigint(v: BigInt) -> Self {
        Value::BigInt(v)
    }

    /// Check if value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Check if value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a symbol.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is a plain object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if value is a date.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Check if value is a function.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Check if value is a BigInt.
    pub fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// Get as boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Get as symbol.
    pub fn as_symbol(&self) -> Option<SymbolValue> {
        match self {
            Value::Symbol(sym) => Some(sym.clone()),
            _ => None,
        }
    }

    /// Get as date.
    pub fn as_date(&self) -> Option<DateValue> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as BigInt.
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Value::BigInt(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Set an object property. Ignored on non-objects.
    pub fn set(&self, key: &str, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().properties.insert(key.to_string(), value);
        }
    }

    /// Get an object property.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().properties.get(key).cloned(),
            _ => None,
        }
    }

    /// The boxed primitive carried by a wrapper object, if any.
    pub fn boxed_primitive(&self) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().primitive.clone(),
            _ => None,
        }
    }

    /// Returns the `typeof`-style runtime type name for this value.
    ///
    /// Follows JavaScript semantics, including the historical
    /// `typeof null === "object"` quirk. Dates and wrapper objects are
    /// objects; BigInt has its own name and matches no tag in the closed
    /// set.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(_) => "object",
            Value::Date(_) => "object",
            Value::Function(_) => "function",
            Value::BigInt(_) => "bigint",
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// Falsy values: undefined, null, false, ±0, NaN, the empty string,
    /// and 0n. Everything else, all objects included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::Object(_) => true,
            Value::Date(_) => true,
            Value::Function(_) => true,
            Value::BigInt(n) => !n.is_zero(),
        }
    }

    /// Unwrap to a primitive value.
    ///
    /// Wrapper objects yield their boxed primitive, dates yield their
    /// numeric timestamp, and every other value (plain objects included)
    /// yields itself unchanged.
    pub fn to_primitive(&self) -> Value {
        match self {
            Value::Object(obj) => match &obj.borrow().primitive {
                Some(p) => p.clone(),
                None => self.clone(),
            },
            Value::Date(d) => Value::Number(d.time_value()),
            other => other.clone(),
        }
    }

    /// Convert to a display string.
    ///
    /// Wrapper objects render their boxed primitive, so a boxed string's
    /// conversion is the string itself; plain objects render as
    /// `[object Object]`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => {
                if n.is_nan() {
                    "NaN".to_string()
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        "Infinity".to_string()
                    } else {
                        "-Infinity".to_string()
                    }
                } else if *n == n.trunc() && n.abs() < 1e15 {
                    // Integer-valued doubles display without a decimal point
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::String(s) => s.clone(),
            Value::Symbol(sym) => sym.to_string(),
            Value::Object(obj) => match &obj.borrow().primitive {
                Some(p) => p.to_display_string(),
                None => "[object Object]".to_string(),
            },
            Value::Date(d) => d.to_string(),
            Value::Function(_) => "function () { [native code] }".to_string(),
            Value::BigInt(n) => format!("{}n", n),
        }
    }

    /// Invoke this value as a function.
    ///
    /// `context` is the forwarded calling context, `args` the pass-through
    /// arguments. Non-function values return [`NormalizeError::NotCallable`].
    pub fn call(&self, context: Value, args: Vec<Value>) -> Result<Value, NormalizeError> {
        match self {
            Value::Function(f) => Ok(f.invoke(context, args)),
            other => Err(NormalizeError::NotCallable(other.type_of())),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(sym) => f.debug_tuple("Symbol").field(sym).finish(),
            Value::Object(obj) => f.debug_tuple("Object").field(&obj.borrow()).finish(),
            Value::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Value::Function(_) => write!(f, "Function(...)"),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            // NaN != NaN, like any number comparison
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            // Reference types compare by identity
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
