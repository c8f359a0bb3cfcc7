//! Unique symbol values.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs.
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique, immutable symbol value.
///
/// Each symbol has a process-unique internal ID and an optional description
/// for debugging. Equality is by ID: two symbols with the same description
/// are still distinct.
///
/// # Examples
///
/// ```
/// use core_types::SymbolValue;
///
/// let a = SymbolValue::new(Some("marker"));
/// let b = SymbolValue::new(Some("marker"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolValue {
    /// Unique identifier for this symbol.
    id: u64,
    /// Optional description for debugging.
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue {
            id,
            description: description.map(str::to_string),
        }
    }

    /// The unique ID of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The description of this symbol, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
