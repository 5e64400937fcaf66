//! Nested property access with defaults.
//!
//! # Path syntax
//!
//! - `"a.b.c"` -- object keys separated by dots
//! - `"items[0].price"` -- bracketed array index
//! - `"meta[\"sku.code\"]"` or `"meta['sku.code']"` -- quoted key that may
//!   contain dots or brackets (`\` escapes the quote character)
//!
//! A key that exists verbatim on the root object wins over path parsing, so
//! `get(&record, "a.b")` finds an entry literally named `"a.b"`.

use coercion_engine::Value;

/// Resolve `path` against `object`.
///
/// Returns `None` when any step is missing, when an intermediate value is not
/// an object or array, or when the resolved value is `Undefined`. A resolved
/// `Null` is returned as-is.
///
/// ```
/// use serde_json::json;
/// use value_utils::{get, Value};
///
/// let product = Value::from(json!({"details": {"price": 8.5}, "tags": ["fresh"]}));
/// assert_eq!(get(&product, "details.price"), Some(&Value::from(8.5)));
/// assert_eq!(get(&product, "tags[0]"), Some(&Value::from("fresh")));
/// assert_eq!(get(&product, "details.discount"), None);
/// ```
pub fn get<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(direct) = object.as_object().and_then(|o| o.get(path)) {
        return defined(direct);
    }
    let keys = parse_path(path);
    get_path(object, &keys)
}

/// Like [`get`], but returns an owned copy of the value or `default`.
pub fn get_or(object: &Value, path: &str, default: Value) -> Value {
    get(object, path).cloned().unwrap_or(default)
}

/// Resolve pre-split keys against `object`. Array steps take decimal indices.
/// An empty key list resolves to nothing.
pub fn get_path<'a, K: AsRef<str>>(object: &'a Value, keys: &[K]) -> Option<&'a Value> {
    if keys.is_empty() {
        return None;
    }
    let mut current = object;
    for key in keys {
        current = child(current, key.as_ref())?;
    }
    defined(current)
}

fn defined(value: &Value) -> Option<&Value> {
    match value {
        Value::Undefined => None,
        other => Some(other),
    }
}

fn child<'a>(parent: &'a Value, key: &str) -> Option<&'a Value> {
    match parent {
        Value::Object(object) => object.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Split a path string into keys.
fn parse_path(path: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    keys.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    keys.push(std::mem::take(&mut current));
                }
                match read_bracket(&mut chars) {
                    Some(key) => keys.push(key),
                    // Unterminated bracket: keep the rest as a literal key.
                    None => {
                        current.push('[');
                        current.extend(chars.by_ref());
                    }
                }
            }
            other => current.push(other),
        }
    }
    if !current.is_empty() {
        keys.push(current);
    }
    keys
}

/// Read the contents of a `[...]` group after its opening bracket, consuming
/// the closing bracket. Quoted contents are unescaped.
fn read_bracket(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut lookahead = chars.clone();
    let mut key = String::new();

    match lookahead.peek().copied() {
        Some(quote @ ('"' | '\'')) => {
            lookahead.next();
            loop {
                match lookahead.next()? {
                    '\\' => key.push(lookahead.next()?),
                    c if c == quote => break,
                    c => key.push(c),
                }
            }
            if lookahead.next()? != ']' {
                return None;
            }
        }
        _ => loop {
            match lookahead.next()? {
                ']' => break,
                c => key.push(c),
            }
        },
    }

    *chars = lookahead;
    Some(key)
}
