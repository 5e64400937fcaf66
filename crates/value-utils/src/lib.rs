//! # value-utils
//!
//! Null-tolerant helpers for loosely-typed data, built on
//! [`coercion_engine::Value`].
//!
//! Every helper accepts whatever it is given: a missing collection iterates as
//! empty, a broken path yields the caller's default, any value has a string
//! form. Numeric work is left to the engine: helpers hand back raw values and
//! callers coerce them with [`to_number`] or [`to_finite`].
//!
//! ```rust
//! use serde_json::json;
//! use value_utils::{get_or, reduce, to_finite, Value};
//!
//! let cart = Value::from(json!({"items": [
//!     {"name": "Tomato", "price": "8.50", "quantity": 2},
//!     {"name": "Bread", "price": 3, "quantity": "1"},
//! ]}));
//!
//! let items = get_or(&cart, "items", Value::Array(vec![]));
//! let total = reduce(&items, |sum, item, _, _| {
//!     let price = to_finite(&get_or(item, "price", Value::Null)).unwrap();
//!     let quantity = to_finite(&get_or(item, "quantity", Value::Null)).unwrap();
//!     Value::from(sum.as_f64().unwrap_or(0.0) + price * quantity)
//! }, Some(Value::from(0)));
//! assert_eq!(total, Value::from(20.0));
//! ```
//!
//! ## Modules
//!
//! - [`collection`]: `filter`, `map`, `every`, `reduce`, `is_empty`
//! - [`path`]: `get`, `get_or`, `get_path`
//! - [`string`]: `to_string`, `words`, `words_with`

pub mod collection;
pub mod path;
pub mod string;

pub use coercion_engine::{to_finite, to_number, Object, Value};
pub use collection::{every, filter, is_empty, map, reduce, Key};
pub use path::{get, get_or, get_path};
pub use string::{to_string, words, words_with};
