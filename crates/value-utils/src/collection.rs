//! Iteration helpers that tolerate missing collections.
//!
//! Anything that is not an array (`null`, `undefined`, a number...) iterates
//! as an empty array. Callbacks receive the element, its index and the whole
//! slice, in that order. A panic inside a callback unwinds to the caller; the
//! helpers do not catch it.

use coercion_engine::Value;

/// Elements of an array, or an empty slice for anything else.
fn elements(collection: &Value) -> &[Value] {
    collection.as_array().unwrap_or(&[])
}

/// Keep the elements for which `predicate` returns `true`, in order.
///
/// ```
/// use value_utils::{filter, Value};
///
/// let numbers = Value::Array((1..=5).map(Value::from).collect());
/// let kept = filter(&numbers, |n, _, _| n.as_f64().is_some_and(|n| n > 3.0));
/// assert_eq!(kept, vec![Value::from(4), Value::from(5)]);
/// assert!(filter(&Value::Null, |_, _, _| true).is_empty());
/// ```
pub fn filter<P>(collection: &Value, mut predicate: P) -> Vec<Value>
where
    P: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(collection);
    let mut result = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            result.push(item.clone());
        }
    }
    result
}

/// Transform every element with `iteratee`.
pub fn map<T, F>(collection: &Value, mut iteratee: F) -> Vec<T>
where
    F: FnMut(&Value, usize, &[Value]) -> T,
{
    let items = elements(collection);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| iteratee(item, index, items))
        .collect()
}

/// `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails. An empty or missing collection
/// is vacuously `true`.
pub fn every<P>(collection: &Value, mut predicate: P) -> bool
where
    P: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(collection);
    items
        .iter()
        .enumerate()
        .all(|(index, item)| predicate(item, index, items))
}

/// Position of an element passed to a [`reduce`] iteratee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Array index.
    Index(usize),
    /// Object entry key.
    Name(&'a str),
}

/// Fold a collection into a single value.
///
/// Arrays are visited by index and objects by entry, in insertion order.
/// The iteratee receives the accumulator, the element, its key and the whole
/// collection. Without an initial `accumulator` the first element seeds it
/// and iteration starts at the second; an empty collection then yields
/// `Undefined`. Anything other than an array or object is empty.
pub fn reduce<F>(collection: &Value, mut iteratee: F, accumulator: Option<Value>) -> Value
where
    F: FnMut(Value, &Value, Key<'_>, &Value) -> Value,
{
    let pairs: Vec<(Key<'_>, &Value)> = match collection {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (Key::Index(i), item))
            .collect(),
        Value::Object(object) => object
            .entries()
            .iter()
            .map(|(k, v)| (Key::Name(k.as_str()), v))
            .collect(),
        _ => Vec::new(),
    };

    let mut pairs = pairs.into_iter();
    let mut acc = match accumulator {
        Some(initial) => initial,
        None => match pairs.next() {
            Some((_, first)) => first.clone(),
            None => return Value::Undefined,
        },
    };
    for (key, item) in pairs {
        acc = iteratee(acc, item, key, collection);
    }
    acc
}

/// `true` for values with nothing in them.
///
/// Strings and arrays are empty when their length is zero and objects when
/// they have no entries. Values with no notion of contents (`null`,
/// `undefined`, booleans, numbers, symbols, functions) are always empty.
/// `Value` has no keyed-collection kind, so maps and sets are modeled as
/// objects and arrays.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(object) => object.is_empty(),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Symbol(_)
        | Value::Function(_) => true,
    }
}
