//! String conversion and word splitting.

use std::sync::OnceLock;

use coercion_engine::{display, Value};
use regex::Regex;

/// String form of any value.
///
/// Strings pass through, `-0` keeps its sign, and array elements are
/// converted recursively with `null`/`undefined` elements left blank.
/// Everything else uses the engine's display form, so `null` becomes
/// `"null"`.
///
/// ```
/// use value_utils::{to_string, Value};
///
/// assert_eq!(to_string(&Value::from(-0.0)), "-0");
/// assert_eq!(to_string(&Value::from(vec![Value::from(1), Value::Null, Value::from(3)])), "1,,3");
/// assert_eq!(to_string(&Value::Null), "null");
/// ```
pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if *n == 0.0 && n.is_sign_negative() => "-0".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    to_string(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        other => display(other),
    }
}

/// Runs of characters outside ASCII punctuation, control and space.
fn ascii_words() -> &'static Regex {
    static ASCII_WORDS: OnceLock<Regex> = OnceLock::new();
    ASCII_WORDS.get_or_init(|| {
        Regex::new(r"[^\x00-\x2f\x3a-\x40\x5b-\x60\x7b-\x7f]+").expect("valid ascii word regex")
    })
}

/// Text that needs case- and digit-aware splitting.
fn needs_unicode_split() -> &'static Regex {
    static HAS_UNICODE_WORD: OnceLock<Regex> = OnceLock::new();
    HAS_UNICODE_WORD.get_or_init(|| {
        Regex::new(r"[a-z][A-Z]|[A-Z]{2}[a-z]|[0-9][a-zA-Z]|[a-zA-Z][0-9]|[^a-zA-Z0-9 ]")
            .expect("valid unicode word detection regex")
    })
}

/// Split text into words.
///
/// Plain ASCII text splits on punctuation and whitespace. Text with mixed
/// case, letters next to digits, or non-ASCII characters is also split at
/// case changes (`helloWorld`, `XMLHttp`) and letter/digit boundaries
/// (`item123`), keeping ordinals such as `1st` and `22nd` whole.
///
/// ```
/// use value_utils::words;
///
/// assert_eq!(words("fred, barney, & pebbles"), ["fred", "barney", "pebbles"]);
/// assert_eq!(words("item123 product456"), ["item", "123", "product", "456"]);
/// assert!(words("").is_empty());
/// ```
pub fn words(text: &str) -> Vec<String> {
    if needs_unicode_split().is_match(text) {
        unicode_words(text)
    } else {
        words_with(text, ascii_words())
    }
}

/// Every match of `pattern` in `text`, in order.
pub fn words_with(text: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Upper,
    Lower,
    Digit,
    Separator,
}

fn classify(c: char) -> Class {
    if c.is_numeric() {
        Class::Digit
    } else if c.is_uppercase() {
        Class::Upper
    } else if c.is_alphabetic() {
        Class::Lower
    } else {
        Class::Separator
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn unicode_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut run: Vec<(char, Class)> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        let class = classify(c);
        if class != Class::Separator {
            run.push((c, class));
            continue;
        }
        // Contractions like "world's" stay in one word.
        let inside_word = is_apostrophe(c)
            && run.last().is_some_and(|&(_, prev)| prev != Class::Digit)
            && chars
                .get(i + 1)
                .is_some_and(|&next| matches!(classify(next), Class::Upper | Class::Lower));
        if inside_word {
            run.push((c, Class::Lower));
        } else {
            split_run(&run, &mut result);
            run.clear();
        }
    }
    split_run(&run, &mut result);
    result
}

/// `true` if the two letters at `start` are the English ordinal suffix for
/// the digit before them (`1st`, `2ND`, `7th`) and end the run or give way to
/// an upper-case letter.
fn is_ordinal_suffix(run: &[(char, Class)], start: usize) -> bool {
    let expected = match run[start - 1].0 {
        '1' => "st",
        '2' => "nd",
        '3' => "rd",
        d if d.is_ascii_digit() => "th",
        _ => return false,
    };
    let (Some(&(first, case)), Some(&(second, second_case))) =
        (run.get(start), run.get(start + 1))
    else {
        return false;
    };
    let suffix: String = [first, second].iter().collect();
    let ends = match run.get(start + 2) {
        None => true,
        Some(&(_, next)) => case == Class::Lower && next == Class::Upper,
    };
    case == second_case && suffix.eq_ignore_ascii_case(expected) && ends
}

/// Break a run of word characters at case and digit boundaries. Ordinal
/// suffixes stay with their digits.
fn split_run(run: &[(char, Class)], out: &mut Vec<String>) {
    let mut word = String::new();
    for (i, &(c, class)) in run.iter().enumerate() {
        if i > 0 && !(run[i - 1].1 == Class::Digit && is_ordinal_suffix(run, i)) {
            let prev = run[i - 1].1;
            let next = run.get(i + 1).map(|&(_, class)| class);
            let boundary = (prev == Class::Digit) != (class == Class::Digit)
                || (prev == Class::Lower && class == Class::Upper)
                || (prev == Class::Upper && class == Class::Upper && next == Some(Class::Lower));
            if boundary {
                out.push(std::mem::take(&mut word));
            }
        }
        word.push(c);
    }
    if !word.is_empty() {
        out.push(word);
    }
}
