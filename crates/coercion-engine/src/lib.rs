//! # coercion-engine
//!
//! Lenient value-to-number coercion for loosely-typed input.
//!
//! Form fields, decoded JSON records and other heterogeneous data rarely arrive
//! with the numeric type application code wants. This crate models such input as
//! a dynamic [`Value`] and converts it to an `f64` with predictable, strict rules:
//! a small literal grammar (decimal, scientific, binary, octal, hexadecimal and
//! `Infinity`), a one-level object-to-primitive hook, and exact IEEE-754 edge
//! cases. Anything that is not a complete literal becomes NaN, never a partial
//! parse.
//!
//! ## Quick start
//!
//! ```rust
//! use coercion_engine::{to_finite, to_number, Object, Value};
//!
//! assert_eq!(to_number(&Value::from("  12.50 ")).unwrap(), 12.5);
//! assert_eq!(to_number(&Value::from("0b1111")).unwrap(), 15.0);
//! assert!(to_number(&Value::from("1,234.56")).unwrap().is_nan());
//!
//! let price = Object::with_value_of(|| Ok(Value::from(42)));
//! assert_eq!(to_number(&Value::Object(price)).unwrap(), 42.0);
//!
//! assert_eq!(to_finite(&Value::from(f64::INFINITY)).unwrap(), f64::MAX);
//! ```
//!
//! ## Modules
//!
//! - [`coerce`]: `to_number` / `to_finite` dispatch
//! - [`literal`]: numeric literal grammar for text input
//! - [`display`]: string conversion used when structures are coerced
//! - [`value`]: the dynamic `Value` model
//! - [`object`]: structured objects and the `ValueOf` hook
//! - [`json`]: `serde_json` interop
//! - [`error`]: error types

pub mod coerce;
pub mod display;
pub mod error;
pub mod json;
pub mod literal;
pub mod object;
pub mod value;

pub use coerce::{clamp_finite, to_finite, to_number};
pub use display::{display, format_number};
pub use error::{CoerceError, HookError, Result};
pub use literal::string_to_number;
pub use object::{Object, ValueOf};
pub use value::{Function, Symbol, Value};
