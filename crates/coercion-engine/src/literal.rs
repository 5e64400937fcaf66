//! Numeric literal grammar for text input.
//!
//! Text converts to a number only if, after trimming, it is exactly one
//! complete literal:
//!
//! - binary `0b1010`, octal `0o17`, hexadecimal `0xFF` (prefix letter in
//!   either case, at least one digit, never signed)
//! - decimal `42`, `-15.75`, `.5`, `5.`, `1.5e3`, `2E-3` (optional sign)
//! - `Infinity`, matched case-insensitively, with an optional sign
//!
//! Empty or all-whitespace text converts to 0. Everything else, including
//! locale formats (`1,234.56`), currency (`€12`), `NaN`, `inf` and digit
//! separators (`1_000`), converts to NaN. The lexer either accepts the whole
//! input or rejects it; there are no partial parses.

/// Convert text to a number according to the literal grammar.
///
/// ```
/// use coercion_engine::string_to_number;
///
/// assert_eq!(string_to_number(" 0x1F "), 31.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert!(string_to_number("-0x1F").is_nan());
/// assert!(string_to_number("12abc").is_nan());
/// ```
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = trim(text);
    if trimmed.is_empty() {
        return 0.0;
    }
    lex(trimmed).map_or(f64::NAN, |literal| literal.value())
}

/// A fully matched literal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Literal<'a> {
    /// Unsigned integer digits in base 2, 8 or 16 (prefix stripped).
    Radix { radix: u32, digits: &'a str },
    /// Validated decimal text, sign included.
    Decimal(&'a str),
    Infinity { negative: bool },
}

impl Literal<'_> {
    fn value(self) -> f64 {
        match self {
            Literal::Radix { radix, digits } => radix_value(radix, digits),
            // The slice was validated by `lex_decimal`, which only accepts
            // strings `f64::from_str` also accepts.
            Literal::Decimal(text) => text.parse().unwrap_or(f64::NAN),
            Literal::Infinity { negative: false } => f64::INFINITY,
            Literal::Infinity { negative: true } => f64::NEG_INFINITY,
        }
    }
}

/// Whitespace removed from both ends before lexing: ASCII space, tab, LF, VT,
/// FF, CR, the Unicode space separators, the line/paragraph separators and the
/// byte-order mark.
pub fn is_trimmable(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim(text: &str) -> &str {
    text.trim_matches(is_trimmable)
}

fn lex(text: &str) -> Option<Literal<'_>> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'+' => (false, &text[1..]),
        b'-' => (true, &text[1..]),
        _ => (false, text),
    };
    let signed = unsigned.len() != text.len();

    if let Some((radix, digits)) = split_radix_prefix(unsigned) {
        // Radix literals are unsigned: "-0x1" is a format error, not a negation.
        if signed || digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(Literal::Radix { radix, digits });
    }

    if unsigned.eq_ignore_ascii_case("infinity") {
        return Some(Literal::Infinity { negative });
    }

    lex_decimal(unsigned).then_some(Literal::Decimal(text))
}

/// Recognize a `0b`/`0o`/`0x` prefix (either case) and return the radix and the
/// remaining digits.
fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'b' | b'B' => 2,
        b'o' | b'O' => 8,
        b'x' | b'X' => 16,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Validate an unsigned decimal literal:
/// `digits [ "." [digits] ] [exponent]` or `"." digits [exponent]`, with
/// `exponent = ("e" | "E") ["+" | "-"] digits`.
fn lex_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Integer value of validated radix digits, rounded once to nearest-even.
///
/// Up to 128 bits the value is exact before the single rounding cast to
/// `f64`. Wider literals keep the top 54 significant bits plus a sticky bit
/// for everything below them.
fn radix_value(radix: u32, digits: &str) -> f64 {
    if let Ok(n) = u128::from_str_radix(digits, radix) {
        return n as f64;
    }
    wide_radix_value(radix, digits)
}

/// Significant bits kept while scanning: the 53-bit mantissa and a round bit.
const KEPT_BITS: u32 = 54;

fn wide_radix_value(radix: u32, digits: &str) -> f64 {
    // Radices 2, 8 and 16 contribute a whole number of bits per digit.
    let bits_per_digit = radix.trailing_zeros();
    let mut top: u64 = 0;
    let mut bit_len: u64 = 0;
    let mut sticky = false;

    for digit in digits.chars().filter_map(|c| c.to_digit(radix)) {
        for shift in (0..bits_per_digit).rev() {
            let bit = (digit >> shift) & 1;
            if bit_len == 0 && bit == 0 {
                continue;
            }
            if bit_len < u64::from(KEPT_BITS) {
                top = (top << 1) | u64::from(bit);
            } else {
                sticky |= bit == 1;
            }
            bit_len += 1;
        }
    }

    if bit_len <= u64::from(KEPT_BITS) {
        // At most 54 bits and nothing below them: the cast rounds correctly.
        return top as f64;
    }

    let round_bit = top & 1;
    let mut mantissa = top >> 1;
    if round_bit == 1 && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
    }
    let mut exponent = bit_len - 1;
    if mantissa == 1 << 53 {
        mantissa >>= 1;
        exponent += 1;
    }
    if exponent > 1023 {
        return f64::INFINITY;
    }
    f64::from_bits(((exponent + 1023) << 52) | (mantissa & ((1 << 52) - 1)))
}
