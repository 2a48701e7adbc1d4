use super::*;
use proptest::prelude::*;

#[test]
fn test_infer_magnitude() {
    assert_eq!(
        infer_format("10M"),
        StatFormat::Magnitude {
            target: 10_000_000.0
        }
    );
    assert_eq!(
        infer_format("1.5M"),
        StatFormat::Magnitude {
            target: 1_500_000.0
        }
    );
}

#[test]
fn test_infer_plus_count() {
    assert_eq!(infer_format("500+"), StatFormat::PlusCount { target: 500 });
    assert_eq!(infer_format("120+"), StatFormat::PlusCount { target: 120 });
}

#[test]
fn test_infer_currency() {
    assert_eq!(infer_format("₹0"), StatFormat::Currency { symbol: '₹' });
    assert_eq!(infer_format("$40"), StatFormat::Currency { symbol: '$' });
    assert_eq!(infer_format("€9"), StatFormat::Currency { symbol: '€' });
}

#[test]
fn test_infer_precedence() {
    // 'M' wins over '+', '+' wins over a currency symbol
    assert_eq!(
        infer_format("5M+"),
        StatFormat::Magnitude {
            target: 5_000_000.0
        }
    );
    assert_eq!(infer_format("₹500+"), StatFormat::PlusCount { target: 0 });
}

#[test]
fn test_infer_plain() {
    assert_eq!(infer_format("42"), StatFormat::Plain);
    assert_eq!(infer_format("hello"), StatFormat::Plain);
    assert_eq!(infer_format(""), StatFormat::Plain);
}

#[test]
fn test_unparseable_text_yields_zero_targets() {
    assert_eq!(infer_format("Many"), StatFormat::Magnitude { target: 0.0 });
    assert_eq!(infer_format("lots+"), StatFormat::PlusCount { target: 0 });
}

#[test]
fn test_format_magnitude_thresholds() {
    assert_eq!(format_magnitude(0.0), "0");
    assert_eq!(format_magnitude(999.0), "999");
    assert_eq!(format_magnitude(1_000.0), "1K");
    assert_eq!(format_magnitude(999_999.0), "1000K");
    assert_eq!(format_magnitude(1_000_000.0), "1M");
    assert_eq!(format_magnitude(10_000_000.0), "10M");
}

#[test]
fn test_format_magnitude_rounds_half_away_from_zero() {
    // 1,500,000 / 1e6 = 1.5 rounds up to 2
    assert_eq!(format_magnitude(1_500_000.0), "2M");
    assert_eq!(format_magnitude(1_499_999.0), "1M");
    assert_eq!(format_magnitude(1_500.0), "2K");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any "<n>M" text, inference derives n million as the target.
    #[test]
    fn prop_magnitude_target_derivation(n in 1u32..1000) {
        let raw = format!("{}M", n);
        prop_assert_eq!(
            infer_format(&raw),
            StatFormat::Magnitude { target: n as f64 * 1_000_000.0 }
        );
    }

    // For any "<n>+" text, inference derives exactly n as the target.
    #[test]
    fn prop_plus_target_derivation(n in 0u64..1_000_000) {
        let raw = format!("{}+", n);
        prop_assert_eq!(infer_format(&raw), StatFormat::PlusCount { target: n });
    }

    // The magnitude rule always yields digits followed by at most one suffix.
    #[test]
    fn prop_magnitude_render_shape(value in 0.0f64..1e9) {
        let rendered = format_magnitude(value);
        let body = rendered.trim_end_matches(['K', 'M']);
        prop_assert!(!body.is_empty());
        prop_assert!(body.chars().all(|c| c.is_ascii_digit()));
        if value >= 1_000_000.0 {
            prop_assert!(rendered.ends_with('M'));
        } else if value >= 1_000.0 {
            prop_assert!(rendered.ends_with('K'));
        }
    }
}
