use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest leading decimal literal
    /// Matches: optional sign, then "Infinity" or digits with optional fraction and exponent
    /// Examples: "12.5abc" -> "12.5", "-.5" -> "-.5", "1e3m" -> "1e3", "1e" -> "1"
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    )
    .unwrap();
}

/// Whitespace skipped before a number: space separators (Zs), line
/// terminators, TAB, VT, FF and the byte order mark. NEL (U+0085) is not included.
fn is_leading_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Return the leading numeric literal of `s`, skipping leading whitespace
pub fn numeric_prefix(s: &str) -> Option<&str> {
    let trimmed = s.trim_start_matches(is_leading_whitespace);
    NUMERIC_PREFIX.find(trimmed).map(|m| m.as_str())
}

/// Parse the leading numeric prefix of `s` as a float
///
/// Trailing garbage is ignored ("12.5abc" is 12.5). Returns `None` when the
/// string does not start with a number, which is the only failure mode.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    numeric_prefix(s).and_then(|literal| literal.parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_prefix_detection() {
        assert_eq!(numeric_prefix("12.5abc"), Some("12.5"));
        assert_eq!(numeric_prefix("  42 ft"), Some("42"));
        assert_eq!(numeric_prefix("-.5"), Some("-.5"));
        assert_eq!(numeric_prefix("+3."), Some("+3."));
        assert_eq!(numeric_prefix("1e3m"), Some("1e3"));
        assert_eq!(numeric_prefix("1E-2"), Some("1E-2"));
        assert_eq!(numeric_prefix("1e"), Some("1"));
        assert_eq!(numeric_prefix("1e+"), Some("1"));
        assert_eq!(numeric_prefix("0x10"), Some("0"));
        assert_eq!(numeric_prefix("-Infinity and beyond"), Some("-Infinity"));

        assert_eq!(numeric_prefix(""), None);
        assert_eq!(numeric_prefix("abc"), None);
        assert_eq!(numeric_prefix("."), None);
        assert_eq!(numeric_prefix("-"), None);
        assert_eq!(numeric_prefix("—"), None);
        assert_eq!(numeric_prefix("e5"), None);
        assert_eq!(numeric_prefix("infinity"), None);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("12.5abc"), Some(12.5));
        assert_eq!(parse_leading_float("\n\t 7"), Some(7.0));
        assert_eq!(parse_leading_float("\u{feff}3"), Some(3.0));
        assert_eq!(parse_leading_float("-.25"), Some(-0.25));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("2e3"), Some(2000.0));
        assert_eq!(parse_leading_float("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));

        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("   "), None);
        assert_eq!(parse_leading_float("NaN"), None);
        assert_eq!(parse_leading_float("abc"), None);
    }

    #[test]
    fn test_leading_whitespace_set() {
        for ws in ["\u{b}", "\u{c}", "\u{a0}", "\u{1680}", "\u{2003}", "\u{2028}", "\u{3000}"] {
            assert_eq!(parse_leading_float(&format!("{}5", ws)), Some(5.0), "{:?}", ws);
        }
        // NEL and zero width space are not whitespace here
        assert_eq!(parse_leading_float("\u{85}5"), None);
        assert_eq!(parse_leading_float("\u{200b}5"), None);
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digits are not decimal literals
        assert_eq!(parse_leading_float("١٢"), None);
    }
}
