//! Structured objects and the primitive-conversion hook.
//!
//! An [`Object`] is an ordered list of entries plus an optional [`ValueOf`]
//! capability. The hook is what lets a wrapper (a boxed number, a date, a
//! domain type) stand in for a primitive in numeric contexts. Objects without
//! a hook convert through their string form instead.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::display::display;
use crate::error::HookError;
use crate::value::Value;

/// Primitive-conversion capability of a structured object.
///
/// The engine calls [`value_of`](ValueOf::value_of) at most once per
/// coercion and re-classifies whatever it returns. Errors are propagated to
/// the caller unchanged.
pub trait ValueOf: Send + Sync {
    /// Produce the primitive substitute for this object.
    fn value_of(&self) -> Result<Value, HookError>;

    /// String form used when the object is stringified (array joins, or a
    /// hook result that is itself an object). `None` means the generic
    /// `[object Object]` placeholder.
    fn to_display(&self) -> Option<String> {
        None
    }
}

/// Placeholder string form of an object with no display of its own.
pub const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// A structured object: insertion-ordered entries and an optional hook.
#[derive(Clone, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
    hook: Option<Arc<dyn ValueOf>>,
}

impl Object {
    /// An empty plain object with no hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain object from `(key, value)` pairs. Later duplicates overwrite
    /// earlier ones in place.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut object = Self::new();
        for (key, value) in entries {
            object.insert(key, value);
        }
        object
    }

    /// An object whose primitive conversion is the given closure.
    pub fn with_value_of<F>(hook: F) -> Self
    where
        F: Fn() -> Result<Value, HookError> + Send + Sync + 'static,
    {
        Self::new().with_hook(FnHook(hook))
    }

    /// A boxed primitive (the `Number`/`String`/`Boolean` wrapper objects):
    /// its hook yields the wrapped value and it displays like it.
    pub fn boxed(primitive: impl Into<Value>) -> Self {
        Self::new().with_hook(Boxed(primitive.into()))
    }

    /// A date object: its hook yields epoch milliseconds.
    pub fn date(at: DateTime<Utc>) -> Self {
        Self::new().with_hook(Date(at))
    }

    /// Attach (or replace) the primitive-conversion hook.
    pub fn with_hook(mut self, hook: impl ValueOf + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Insert or overwrite an entry, keeping the original position on
    /// overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hook, if the object carries one. This is the capability probe the
    /// engine uses to decide whether unwrapping is possible.
    pub fn value_of_hook(&self) -> Option<&dyn ValueOf> {
        self.hook.as_deref()
    }

    /// Generic structural string form: the hook's display if it has one,
    /// otherwise [`OBJECT_PLACEHOLDER`].
    pub fn display_string(&self) -> String {
        self.hook
            .as_ref()
            .and_then(|hook| hook.to_display())
            .unwrap_or_else(|| OBJECT_PLACEHOLDER.to_string())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("entries", &self.entries)
            .field("hook", &self.hook.as_ref().map(|_| "ValueOf"))
            .finish()
    }
}

/// Objects are equal when their entries are equal and they share the same
/// hook instance (or neither has one).
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        let same_hook = match (&self.hook, &other.hook) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_hook && self.entries == other.entries
    }
}

struct FnHook<F>(F);

impl<F> ValueOf for FnHook<F>
where
    F: Fn() -> Result<Value, HookError> + Send + Sync,
{
    fn value_of(&self) -> Result<Value, HookError> {
        (self.0)()
    }
}

struct Boxed(Value);

impl ValueOf for Boxed {
    fn value_of(&self) -> Result<Value, HookError> {
        Ok(self.0.clone())
    }

    fn to_display(&self) -> Option<String> {
        Some(display(&self.0))
    }
}

struct Date(DateTime<Utc>);

impl ValueOf for Date {
    fn value_of(&self) -> Result<Value, HookError> {
        Ok(Value::Number(self.0.timestamp_millis() as f64))
    }

    fn to_display(&self) -> Option<String> {
        Some(
            self.0
                .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
                .to_string(),
        )
    }
}
