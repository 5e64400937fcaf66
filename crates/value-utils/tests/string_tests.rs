/// Tests for string conversion and word splitting.
use chrono::{TimeZone, Utc};
use coercion_engine::Symbol;
use regex::Regex;
use serde_json::json;
use value_utils::{to_string, words, words_with, Object, Value};

// ============================================================================
// to_string
// ============================================================================

mod conversion {
    use super::*;

    #[test]
    fn nullish_uses_keyword() {
        assert_eq!(to_string(&Value::Null), "null");
        assert_eq!(to_string(&Value::Undefined), "undefined");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(to_string(&Value::from("hello")), "hello");
        assert_eq!(to_string(&Value::from("")), "");
    }

    #[test]
    fn numbers() {
        assert_eq!(to_string(&Value::from(42)), "42");
        assert_eq!(to_string(&Value::from(3.14)), "3.14");
        assert_eq!(to_string(&Value::from(-25)), "-25");
        assert_eq!(to_string(&Value::from(0)), "0");
        assert_eq!(to_string(&Value::from(f64::INFINITY)), "Infinity");
        assert_eq!(to_string(&Value::from(f64::NAN)), "NaN");
    }

    #[test]
    fn negative_zero_keeps_sign() {
        assert_eq!(to_string(&Value::from(-0.0)), "-0");
    }

    #[test]
    fn arrays_join_with_commas() {
        assert_eq!(to_string(&Value::from(json!([1, 2, 3]))), "1,2,3");
        assert_eq!(to_string(&Value::from(json!([]))), "");
        assert_eq!(to_string(&Value::from(json!([1, [2, 3], 4]))), "1,2,3,4");
    }

    #[test]
    fn nullish_array_elements_are_blank() {
        let items = Value::from(vec![
            Value::from(1),
            Value::Null,
            Value::from(3),
            Value::Undefined,
            Value::from(5),
        ]);
        assert_eq!(to_string(&items), "1,,3,,5");
    }

    #[test]
    fn negative_zero_inside_array_keeps_sign() {
        let items = Value::from(vec![Value::from(-0.0), Value::from(1)]);
        assert_eq!(to_string(&items), "-0,1");
    }

    #[test]
    fn booleans() {
        assert_eq!(to_string(&Value::from(true)), "true");
        assert_eq!(to_string(&Value::from(false)), "false");
    }

    #[test]
    fn plain_object_uses_placeholder() {
        assert_eq!(to_string(&Value::from(json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn date_renders_its_year() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let text = to_string(&Value::from(Object::date(at)));
        assert!(text.contains("2024"), "got {text}");
    }

    #[test]
    fn symbol_shows_description() {
        assert_eq!(to_string(&Value::from(Symbol::new(Some("test")))), "Symbol(test)");
    }
}

// ============================================================================
// words
// ============================================================================

mod splitting {
    use super::*;

    #[test]
    fn sentence_with_punctuation() {
        assert_eq!(words("fred, barney, & pebbles"), ["fred", "barney", "pebbles"]);
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(words("hello"), ["hello"]);
        assert!(words("").is_empty());
        assert!(words("  ,, & ").is_empty());
    }

    #[test]
    fn letters_and_digits_split() {
        assert_eq!(words("item123 product456"), ["item", "123", "product", "456"]);
    }

    #[test]
    fn product_names_and_queries() {
        assert_eq!(words("Fresh Organic Tomatoes"), ["Fresh", "Organic", "Tomatoes"]);
        assert_eq!(words("organic vegetables fresh"), ["organic", "vegetables", "fresh"]);
    }

    #[test]
    fn product_codes() {
        assert_eq!(words("PROD-123-ABC"), ["PROD", "123", "ABC"]);
    }

    #[test]
    fn repeated_separators() {
        assert_eq!(words("hello    world"), ["hello", "world"]);
        assert_eq!(words("hello-world test_case"), ["hello", "world", "test", "case"]);
    }

    #[test]
    fn case_changes() {
        assert_eq!(words("helloWorld"), ["hello", "World"]);
        assert_eq!(words("XMLHttpRequest"), ["XML", "Http", "Request"]);
    }

    #[test]
    fn ordinals_stay_whole() {
        assert_eq!(words("1st place"), ["1st", "place"]);
        assert_eq!(words("22nd 3RD 11th"), ["22nd", "3RD", "11th"]);
        assert_eq!(words("3rdParty"), ["3rd", "Party"]);
    }

    #[test]
    fn unit_suffixes_still_split() {
        assert_eq!(words("5px 1sts"), ["5", "px", "1", "sts"]);
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(words("don't stop"), ["don't", "stop"]);
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(words("café crème"), ["café", "crème"]);
    }

    #[test]
    fn custom_pattern() {
        let pattern = Regex::new(r"[^, ]+").unwrap();
        assert_eq!(
            words_with("fred, barney, & pebbles", &pattern),
            ["fred", "barney", "&", "pebbles"]
        );
        let non_space = Regex::new(r"\S+").unwrap();
        assert_eq!(words_with("user@example.com", &non_space), ["user@example.com"]);
    }
}
