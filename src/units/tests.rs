#[cfg(test)]
mod tests {
    use super::super::converter::convert;
    use super::super::formatter::{format_fixed, DISPLAY_DECIMALS};
    use super::super::table::LengthUnit;
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = LengthUnit> {
        prop::sample::select(LengthUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_identity_conversion(x in -1.0e9f64..1.0e9, unit in any_unit()) {
            let raw = x.to_string();
            prop_assert_eq!(convert(&raw, unit, unit), format_fixed(x, DISPLAY_DECIMALS));
        }

        #[test]
        fn test_round_trip_within_rounding(
            x in -1.0e6f64..1.0e6,
            from in any_unit(),
            to in any_unit(),
        ) {
            let there = convert(&x.to_string(), from, to);
            let back: f64 = convert(&there, to, from).parse().unwrap();

            // Each leg rounds to 4 decimals; the first leg's error is scaled
            // by the factor ratio on the way back.
            let ratio = from.factor() / to.factor();
            let tolerance = 0.00005 * (1.0 + ratio) + 1e-9 * x.abs() * (1.0 + ratio) + 1e-12;
            prop_assert!(
                (back - x).abs() <= tolerance,
                "{} {} -> {} {} -> {}", x, from, there, to, back
            );
        }

        #[test]
        fn test_non_numeric_input_yields_zero(
            raw in "[a-zA-Z_ ,;!?\\-]*",
            from in any_unit(),
            to in any_unit(),
        ) {
            // Strings of letters and punctuation never start with a number,
            // unless they spell out Infinity
            prop_assume!(!raw.trim_start().trim_start_matches(['+', '-']).starts_with("Infinity"));
            prop_assert_eq!(convert(&raw, from, to), "0");
        }

        #[test]
        fn test_conversion_is_idempotent(raw in ".{0,12}", from in any_unit(), to in any_unit()) {
            let first = convert(&raw, from, to);
            let second = convert(&raw, from, to);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_result_has_four_decimals(x in -1.0e12f64..1.0e12, from in any_unit(), to in any_unit()) {
            let result = convert(&x.to_string(), from, to);
            let (_, fraction) = result.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), DISPLAY_DECIMALS);
            prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let raw = format!("{}", i * 100);
                    convert(&raw, LengthUnit::Foot, LengthUnit::Metre)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = convert(&format!("{}", i * 100), LengthUnit::Foot, LengthUnit::Metre);
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
