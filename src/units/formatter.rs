/// Fractional digits shown for every converted value
pub const DISPLAY_DECIMALS: usize = 4;

/// What the converter shows when the input does not start with a number
pub const UNPARSED_RESULT: &str = "0";

/// Format `value` in fixed notation with exactly `digits` fractional digits
///
/// Digits come from the exact binary value of the float. When that value lies
/// exactly halfway between two candidates the one further from zero wins, so
/// `0.03125` becomes `"0.0313"` and `-0.03125` becomes `"-0.0313"`.
///
/// Negative zero prints without a sign. Negative values that round to zero
/// keep theirs (`-0.00001` is `"-0.0000"`). Infinities print as `Infinity`
/// and `-Infinity`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let body = if is_halfway(magnitude, digits) {
        round_tie_up(magnitude, digits)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// True when `magnitude` sits exactly between two values with `digits` decimals
///
/// A tie needs an exact decimal expansion of `digits + 1` places ending in 5,
/// which for a binary float means its denominator is exactly 2^(digits + 1).
fn is_halfway(magnitude: f64, digits: usize) -> bool {
    // Past 2^53 every float is an integer
    if magnitude >= 9_007_199_254_740_992.0 || digits > 30 {
        return false;
    }
    let exp = digits as i32;
    let fine = magnitude * 2f64.powi(exp + 1);
    let coarse = magnitude * 2f64.powi(exp);
    fine.fract() == 0.0 && coarse.fract() != 0.0
}

fn round_tie_up(magnitude: f64, digits: usize) -> String {
    // Exact: the expansion has precisely digits + 1 places
    let mut text = format!("{:.*}", digits + 1, magnitude);
    text.pop();
    if text.ends_with('.') {
        text.pop();
    }
    increment_last_digit(&text)
}

/// Add one unit in the last place of a plain decimal string
fn increment_last_digit(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if *byte == b'.' {
            continue;
        }
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        bytes.insert(0, b'1');
    }
    String::from_utf8(bytes).unwrap_or_else(|_| text.to_string())
}
