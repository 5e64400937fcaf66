/// Literal grammar tests for `string_to_number`.
///
/// Each accepted form is checked alongside its near-misses, since the grammar
/// must reject anything short of a complete literal.
use coercion_engine::literal::is_trimmable;
use coercion_engine::string_to_number;

fn assert_parses(text: &str, expected: f64) {
    let got = string_to_number(text);
    assert_eq!(
        got.to_bits(),
        expected.to_bits(),
        "{text:?}: got {got}, expected {expected}"
    );
}

fn assert_rejects(text: &str) {
    let got = string_to_number(text);
    assert!(got.is_nan(), "{text:?} should be rejected, got {got}");
}

// ============================================================================
// Whitespace
// ============================================================================

mod whitespace {
    use super::*;

    #[test]
    fn ascii_whitespace_is_trimmed() {
        assert_parses(" \t\n\r\u{000B}\u{000C}7 \t\n\r\u{000B}\u{000C}", 7.0);
    }

    #[test]
    fn unicode_space_separators_are_trimmed() {
        assert_parses("\u{00A0}8\u{3000}", 8.0);
        assert_parses("\u{2000}\u{200A}9\u{202F}\u{205F}", 9.0);
        assert_parses("\u{1680}1\u{2028}\u{2029}", 1.0);
        assert_parses("\u{FEFF}2", 2.0);
    }

    #[test]
    fn blank_is_zero() {
        assert_parses("", 0.0);
        assert_parses(" \u{00A0}\u{FEFF}\t", 0.0);
    }

    #[test]
    fn next_line_and_zero_width_space_are_not_whitespace() {
        assert!(!is_trimmable('\u{0085}'));
        assert!(!is_trimmable('\u{200B}'));
        assert_rejects("\u{0085}1");
        assert_rejects("1\u{200B}");
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        assert_rejects("1 2");
        assert_rejects("- 1");
        assert_rejects("0x 1F");
    }
}

// ============================================================================
// Radix literals
// ============================================================================

mod radix {
    use super::*;

    #[test]
    fn binary() {
        assert_parses("0b0", 0.0);
        assert_parses("0b1", 1.0);
        assert_parses("0b11111111", 255.0);
        assert_parses("0B101", 5.0);
        assert_rejects("0b");
        assert_rejects("0b2");
        assert_rejects("0b10a");
    }

    #[test]
    fn octal() {
        assert_parses("0o0", 0.0);
        assert_parses("0o10", 8.0);
        assert_parses("0O77", 63.0);
        assert_rejects("0o");
        assert_rejects("0o8");
        assert_rejects("0o19");
    }

    #[test]
    fn hexadecimal() {
        assert_parses("0x0", 0.0);
        assert_parses("0xF", 15.0);
        assert_parses("0XfF", 255.0);
        assert_rejects("0x");
        assert_rejects("0xG1");
        assert_rejects("0x1.5");
    }

    #[test]
    fn signs_are_rejected_on_every_radix() {
        for text in ["-0b1", "+0b1", "-0o7", "+0o7", "-0x1", "+0x1"] {
            assert_rejects(text);
        }
    }

    #[test]
    fn radix_literals_never_carry_exponents() {
        assert_rejects("0b1e3");
        assert_rejects("0o7e1");
    }

    #[test]
    fn wide_literals_round_to_nearest() {
        // 2^64 needs 65 bits; exact in the u128 path.
        assert_parses("0x10000000000000000", 18_446_744_073_709_551_616.0);
        // 2^53 + 1 is not representable and rounds to even.
        assert_parses("0x20000000000001", 9_007_199_254_740_992.0);
        let wide = format!("0x1{}", "0".repeat(40));
        assert_parses(&wide, 2f64.powi(160));
    }

    #[test]
    fn wider_than_128_bits_rounds_once() {
        // 2^128 + 2^75 + 1: above the halfway point, so it rounds up.
        assert_parses(
            "0x100000000000008000000000000000001",
            2f64.powi(128) + 2f64.powi(76),
        );
        // Exact ties go to the even mantissa.
        assert_parses("0x100000000000008000000000000000000", 2f64.powi(128));
        assert_parses(
            "0x100000000000018000000000000000000",
            2f64.powi(128) + 2f64.powi(77),
        );
        // 2^150 - 1 in octal rounds up to the next power of two.
        assert_parses(&format!("0o{}", "7".repeat(50)), 2f64.powi(150));
    }

    #[test]
    fn wide_literals_at_the_edge_of_the_range() {
        let max = format!("0b{}{}", "1".repeat(53), "0".repeat(971));
        assert_parses(&max, f64::MAX);
        // 2^1024 - 1 rounds past the largest double.
        assert_parses(&format!("0x{}", "f".repeat(256)), f64::INFINITY);
    }

    #[test]
    fn leading_zeros_inside_radix_digits() {
        assert_parses("0x000F", 15.0);
        assert_parses("0b0001", 1.0);
    }
}

// ============================================================================
// Decimal literals
// ============================================================================

mod decimal {
    use super::*;

    #[test]
    fn integers_and_fractions() {
        assert_parses("0", 0.0);
        assert_parses("-0", -0.0);
        assert_parses("+0", 0.0);
        assert_parses("17", 17.0);
        assert_parses("1.25", 1.25);
        assert_parses(".25", 0.25);
        assert_parses("25.", 25.0);
        assert_parses("-.5", -0.5);
    }

    #[test]
    fn exponents() {
        assert_parses("1e0", 1.0);
        assert_parses("1e+2", 100.0);
        assert_parses("1E-2", 0.01);
        assert_parses("5.e1", 50.0);
        assert_parses(".5e1", 5.0);
        assert_rejects("1e");
        assert_rejects("1e+");
        assert_rejects("e5");
        assert_rejects("1e5.5");
        assert_rejects("1e5e5");
    }

    #[test]
    fn lone_signs_and_points_are_rejected() {
        for text in ["+", "-", ".", "+.", "-.", "..5", "5..", "+-5", "--5"] {
            assert_rejects(text);
        }
    }

    #[test]
    fn separators_are_rejected() {
        assert_rejects("1_000");
        assert_rejects("1,000");
        assert_rejects("1'000");
        assert_rejects("1.000,50");
    }

    #[test]
    fn range_events() {
        assert_parses("1e309", f64::INFINITY);
        assert_parses("-1e309", f64::NEG_INFINITY);
        assert_parses("1e-400", 0.0);
        assert_parses("-1e-400", -0.0);
        assert_parses("4.9e-324", 5e-324);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert_rejects("\u{0661}\u{0662}");
        assert_rejects("\u{FF11}");
    }
}

// ============================================================================
// Keywords
// ============================================================================

mod keywords {
    use super::*;

    #[test]
    fn infinity_in_any_case() {
        assert_parses("Infinity", f64::INFINITY);
        assert_parses("INFINITY", f64::INFINITY);
        assert_parses("-infinity", f64::NEG_INFINITY);
        assert_parses("+Infinity", f64::INFINITY);
    }

    #[test]
    fn other_keywords_are_rejected() {
        for text in ["NaN", "nan", "inf", "-inf", "Infinit", "Infinityy", "null", "true"] {
            assert_rejects(text);
        }
    }
}
