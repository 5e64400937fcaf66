//! String conversion of values.
//!
//! The engine stringifies structures before parsing them as numbers: an array
//! `[42]` becomes `"42"`, a plain object becomes `"[object Object]"`. The
//! rules here are the ones a dynamic language uses for that conversion,
//! including its number formatting, so that `[1e21]` and `[0.000001]` render
//! the same digits the language would.

use crate::value::Value;

/// Convert any value to its string form.
///
/// - `undefined`, `null`, `true`, `false` render as their keyword
/// - numbers render via [`format_number`] (`-0` renders as `"0"`)
/// - symbols render as `Symbol(description)`
/// - arrays join their elements with `,`, rendering null/undefined
///   elements as empty and flattening nested arrays
/// - objects render through their hook's display, else `[object Object]`
pub fn display(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Symbol(symbol) => format!("Symbol({})", symbol.description().unwrap_or("")),
        Value::Array(items) => join(items),
        Value::Function(function) => {
            format!(
                "function {}() {{ [native code] }}",
                function.name().unwrap_or("")
            )
        }
        Value::Object(object) => object.display_string(),
    }
}

/// Comma-join array elements the way `Array.prototype.join` does.
fn join(items: &[Value]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if !item.is_nullish() {
            out.push_str(&display(item));
        }
    }
    out
}

/// Format a double the way `Number.prototype.toString()` does.
///
/// Uses the shortest digit string that round-trips, then lays it out in plain
/// notation for decimal exponents in `-7 < e < 21` and scientific notation
/// (`1e+21`, `1.5e-7`) otherwise. Both zeros render as `"0"`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e3" or "5e-324".
    let exp_form = format!("{:e}", n.abs());
    let (mantissa, exponent) = exp_form.split_once('e').unwrap_or((&exp_form, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if point - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(point - 1).abs().to_string());
    }
    out
}
