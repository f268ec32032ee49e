use crate::units::formatter::{format_fixed, DISPLAY_DECIMALS, UNPARSED_RESULT};
use crate::units::prefix::parse_leading_float;
use crate::units::table::LengthUnit;
use std::fmt;

/// Convert a raw user-entered value between two length units
///
/// The input goes through leading-prefix parsing, so `"12.5abc"` counts as
/// 12.5. Input with no numeric prefix yields `"0"`; this function never fails.
/// The result always carries four fractional digits (see [`format_fixed`]).
pub fn convert(raw_value: &str, from: LengthUnit, to: LengthUnit) -> String {
    ConversionRequest::new(raw_value, from, to).run().into_string()
}

/// Pivot a quantity through Metre: `value / factor(from) * factor(to)`
///
/// Same-unit conversions return `value` untouched.
pub fn convert_value(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let in_base = value / from.factor();
    in_base * to.factor()
}

/// A single conversion as requested by the form
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest<'a> {
    pub raw_value: &'a str,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(raw_value: &'a str, from: LengthUnit, to: LengthUnit) -> Self {
        Self {
            raw_value,
            from,
            to,
        }
    }

    pub fn run(&self) -> ConversionResult {
        match parse_leading_float(self.raw_value) {
            Some(value) => {
                let output = convert_value(value, self.from, self.to);
                ConversionResult::Converted(format_fixed(output, DISPLAY_DECIMALS))
            }
            None => ConversionResult::Unparsed,
        }
    }
}

/// Outcome of a conversion, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Value formatted with four fractional digits
    Converted(String),
    /// Input had no numeric prefix; displays as "0"
    Unparsed,
}

impl ConversionResult {
    pub fn as_str(&self) -> &str {
        match self {
            ConversionResult::Converted(text) => text,
            ConversionResult::Unparsed => UNPARSED_RESULT,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ConversionResult::Converted(text) => text,
            ConversionResult::Unparsed => UNPARSED_RESULT.to_string(),
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, ConversionResult::Unparsed)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use LengthUnit::*;

    #[test]
    fn test_known_conversions() {
        assert_eq!(convert("1", Metre, Foot), "3.2808");
        assert_eq!(convert("1", Mile, Metre), "1609.3445");
        assert_eq!(convert("1000", Millimetre, Metre), "1.0000");
        assert_eq!(convert("1", Metre, Millimetre), "1000.0000");
        assert_eq!(convert("5280", Foot, Mile), "1.0000");
    }

    #[test]
    fn test_unparsed_input_shows_zero() {
        assert_eq!(convert("abc", Metre, Foot), "0");
        assert_eq!(convert("", Metre, Foot), "0");
        assert_eq!(convert("—", Mile, Foot), "0");
        assert_eq!(convert(".", Foot, Metre), "0");
    }

    #[test]
    fn test_leading_prefix_input() {
        assert_eq!(convert("12.5abc", Metre, Metre), "12.5000");
        assert_eq!(convert("  2 metres", Metre, Millimetre), "2000.0000");
        assert_eq!(convert("-1", Metre, Foot), "-3.2808");
    }

    #[test]
    fn test_infinite_input() {
        assert_eq!(convert("Infinity", Metre, Foot), "Infinity");
        assert_eq!(convert("-1e400", Foot, Metre), "-Infinity");
        assert_eq!(convert("1e308", Mile, Millimetre), "Infinity");
    }

    #[test]
    fn test_convert_value_pivots_through_metre() {
        assert_relative_eq!(convert_value(1.0, Mile, Metre), 1.0 / 0.000621371);
        assert_relative_eq!(convert_value(3.28084, Foot, Metre), 1.0);
        assert_relative_eq!(convert_value(1.0, Mile, Foot), 3.28084 / 0.000621371);
    }

    #[test]
    fn test_same_unit_skips_pivot() {
        // Through Metre this would drift to 0.00045000000000000004 and round up
        assert_ne!(0.00045 / 3.28084 * 3.28084, 0.00045);
        assert_eq!(convert_value(0.00045, Foot, Foot), 0.00045);
        assert_eq!(convert("0.00045", Foot, Foot), "0.0004");
        assert_eq!(convert("0.00045", Foot, Metre), "0.0001");
    }

    #[test]
    fn test_request_result() {
        let result = ConversionRequest::new("1", Metre, Foot).run();
        assert_eq!(result, ConversionResult::Converted("3.2808".to_string()));
        assert!(!result.is_unparsed());
        assert_eq!(result.to_string(), "3.2808");

        let result = ConversionRequest::new("x", Metre, Foot).run();
        assert!(result.is_unparsed());
        assert_eq!(result.as_str(), "0");
        assert_eq!(result.into_string(), "0");
    }
}
