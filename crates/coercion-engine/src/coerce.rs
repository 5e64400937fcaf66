//! Value-to-number coercion.
//!
//! [`to_number`] classifies its input once by matching on [`Value`] and hands
//! each kind to a dedicated conversion:
//!
//! 1. numbers pass through bit-for-bit (signed zero, NaN, ±∞)
//! 2. symbols are NaN and are never stringified
//! 3. objects with a [`ValueOf`](crate::ValueOf) hook are unwrapped exactly
//!    once; the result is classified again, and a result that is still an
//!    object is stringified instead of unwrapped a second time. Objects
//!    without a hook are stringified directly
//! 4. `true` → 1, `false`/`null` → 0, `undefined` → NaN
//! 5. text goes through the [literal grammar](crate::literal)
//! 6. arrays are comma-joined and parsed as text
//! 7. functions are NaN
//!
//! [`to_finite`] layers clamping on top: NaN → 0, ±∞ → ±`f64::MAX`.

use crate::display::display;
use crate::error::{CoerceError, Result};
use crate::literal::string_to_number;
use crate::object::Object;
use crate::value::Value;

/// Coerce any value to an `f64`.
///
/// Malformed input never fails: it yields NaN. The only error is a failing
/// [`ValueOf`](crate::ValueOf) hook, which is returned as
/// [`CoerceError::Hook`] carrying the hook's own error.
///
/// ```
/// use coercion_engine::{to_number, Value};
///
/// assert_eq!(to_number(&Value::from("1.5e3")).unwrap(), 1500.0);
/// assert_eq!(to_number(&Value::Null).unwrap(), 0.0);
/// assert!(to_number(&Value::Undefined).unwrap().is_nan());
/// assert!(to_number(&Value::from("-0x123")).unwrap().is_nan());
/// ```
pub fn to_number(value: &Value) -> Result<f64> {
    match value {
        Value::Object(object) => unwrap_object(object),
        other => Ok(primitive_to_number(other)),
    }
}

/// Coerce any value to a finite `f64`.
///
/// Equivalent to [`clamp_finite`] applied to [`to_number`]. The result is
/// never NaN and never infinite.
///
/// ```
/// use coercion_engine::{to_finite, Value};
///
/// assert_eq!(to_finite(&Value::from("Infinity")).unwrap(), f64::MAX);
/// assert_eq!(to_finite(&Value::from("abc")).unwrap(), 0.0);
/// assert_eq!(to_finite(&Value::from(3.2)).unwrap(), 3.2);
/// ```
pub fn to_finite(value: &Value) -> Result<f64> {
    to_number(value).map(clamp_finite)
}

/// Map NaN to 0 and ±∞ to ±`f64::MAX`; every finite value (signed zero and
/// subnormals included) passes through unchanged.
pub fn clamp_finite(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else if n == f64::INFINITY {
        f64::MAX
    } else if n == f64::NEG_INFINITY {
        -f64::MAX
    } else {
        n
    }
}

/// Rule 3: at most one hook invocation, then classify the result without
/// probing for another hook.
fn unwrap_object(object: &Object) -> Result<f64> {
    let Some(hook) = object.value_of_hook() else {
        return Ok(string_to_number(&object.display_string()));
    };

    tracing::trace!("invoking value-of hook");
    let primitive = hook.value_of().map_err(|err| {
        tracing::debug!(error = %err, "value-of hook failed");
        CoerceError::Hook(err)
    })?;

    Ok(match &primitive {
        Value::Object(inner) => {
            tracing::trace!("value-of returned an object, falling back to its string form");
            string_to_number(&inner.display_string())
        }
        other => primitive_to_number(other),
    })
}

/// Rules 1, 2 and 4–7. Objects reaching this point are stringified.
fn primitive_to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Symbol(_) | Value::Function(_) | Value::Undefined => f64::NAN,
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::String(text) => string_to_number(text),
        Value::Array(_) | Value::Object(_) => string_to_number(&display(value)),
    }
}
