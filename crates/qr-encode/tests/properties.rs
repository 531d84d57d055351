use proptest::prelude::*;
use qr_encode::{encode, EcLevel, Hints};

fn printable_ascii() -> impl Strategy<Value = String> {
    "[ -~]{0,150}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matrix_dimension_always_equals_17_plus_4_times_version(s in printable_ascii()) {
        if let Ok(qr) = encode(&s, EcLevel::L, &Hints::default()) {
            let expected = 17 + 4 * i32::from(qr.version.value());
            prop_assert_eq!(qr.matrix.len() as i32, expected);
            prop_assert!(qr.matrix.iter().all(|row| row.len() as i32 == expected));
        }
    }

    #[test]
    fn encode_is_pure_given_the_same_input(s in printable_ascii(), level in 0u8..4) {
        let ec = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H][level as usize];
        let a = encode(&s, ec, &Hints::default());
        let b = encode(&s, ec, &Hints::default());
        prop_assert_eq!(a.is_ok(), b.is_ok());
        if let (Ok(a), Ok(b)) = (a, b) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn numeric_content_bit_budget_matches_the_standard_formula(n in 0usize..400) {
        let text: String = "9".repeat(n);
        // Every length must fit somewhere in 1..=40 at the lowest EC level,
        // since the standard's max numeric capacity at L exceeds 7000 digits.
        prop_assert!(encode(&text, EcLevel::L, &Hints::default()).is_ok());
    }

    #[test]
    fn alphanumeric_content_round_trips_through_mode_selection(n in 0usize..300) {
        let text: String = "A1".repeat(n);
        let result = encode(&text, EcLevel::L, &Hints::default());
        prop_assert!(result.is_ok());
    }
}
