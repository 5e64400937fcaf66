//! The dynamic value model.
//!
//! Every input the engine accepts is one of a fixed set of kinds. Classifying
//! input happens once, by matching on [`Value`]; there is no runtime type
//! inspection beyond that match.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::object::Object;

/// A loosely-typed value as it arrives from forms, records or scripts.
///
/// Mirrors the kinds a dynamic language distinguishes. `Undefined` (absent)
/// and `Null` (present but empty) are kept apart because they coerce
/// differently.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,
    /// Present, explicitly empty value.
    Null,
    Bool(bool),
    /// IEEE-754 double, including NaN, ±∞ and -0.
    Number(f64),
    String(String),
    Symbol(Symbol),
    /// Ordered sequence.
    Array(Vec<Value>),
    Function(Function),
    /// Structured object, optionally carrying a primitive-conversion hook.
    Object(Object),
}

impl Value {
    /// Short kind name, useful in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    /// `true` for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// `true` for aggregates that go through structural conversion:
    /// objects, arrays and functions.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::Function(_)
        )
    }

    /// Truthiness as a dynamic language defines it: `false`, `0`, `-0`, NaN,
    /// the empty string, `null` and `undefined` are falsy; everything else,
    /// including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Array(_) | Value::Function(_) | Value::Object(_) => true,
        }
    }

    /// The number if this is a `Number`, without any coercion.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// A unique, non-coercible token.
///
/// Each call to [`Symbol::new`] produces a token that is equal only to itself
/// (and its clones), regardless of description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_string),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A callable placeholder. Only its name is observable; it never has a
/// numeric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
    name: Option<String>,
}

impl Function {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
        }
    }

    /// An anonymous function (arrow function, closure).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Value::Function(function)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes `Null`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
