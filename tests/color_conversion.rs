use palettr::{Color, Hsl, PaletteError, hex_to_hsl, hsl_to_hex};
use proptest::prelude::*;

#[test]
fn round_trip_sweeps_the_cube() {
    // Every 97th value plus both ends of the range.
    let mut values: Vec<u32> = (0..=0xFF_FFFF).step_by(97).collect();
    values.push(0xFF_FFFF);
    for value in values {
        let color = Color::from_u24(value);
        assert_eq!(Color::from_hsl(color.to_hsl()), color, "{color}");
    }
}

#[test]
fn reference_values() {
    let hsl = hex_to_hsl("#8b5cf6").unwrap();
    assert!((hsl.h - 258.31).abs() < 0.01, "{hsl:?}");
    assert!((hsl.s - 89.53).abs() < 0.01, "{hsl:?}");
    assert!((hsl.l - 66.27).abs() < 0.01, "{hsl:?}");

    assert_eq!(hsl_to_hex(220.0, 60.0, 50.0), "#3366cc");
    assert_eq!(hsl_to_hex(200.0, 100.0, 95.0), "#e5f6ff");
}

#[test]
fn malformed_input_is_a_format_error() {
    assert!(matches!(hex_to_hsl("#abc"), Err(PaletteError::Format(_))));
    assert!(matches!(hex_to_hsl("abcdef"), Err(PaletteError::Format(_))));
    assert!(matches!(hex_to_hsl("#abcdeg"), Err(PaletteError::Format(_))));
}

proptest! {
    #[test]
    fn hex_survives_hsl_round_trip(value in 0u32..=0xFF_FFFF) {
        let hex = Color::from_u24(value).to_string();
        let hsl = hex_to_hsl(&hex).unwrap();
        prop_assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l), hex);
    }

    #[test]
    fn hue_wraps_every_full_turn(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        prop_assert_eq!(hsl_to_hex(h, s, l), hsl_to_hex(h + 360.0, s, l));
        prop_assert_eq!(hsl_to_hex(h, s, l), hsl_to_hex(h - 360.0, s, l));
    }

    #[test]
    fn decoded_values_stay_in_range(value in 0u32..=0xFF_FFFF) {
        let Hsl { h, s, l } = Color::from_u24(value).to_hsl();
        prop_assert!((0.0..360.0).contains(&h));
        prop_assert!((0.0..=100.0).contains(&s));
        prop_assert!((0.0..=100.0).contains(&l));
    }

    #[test]
    fn zero_saturation_is_gray(h in -720.0f64..720.0, l in 0.0f64..=100.0) {
        let (r, g, b) = Color::from_hsl(Hsl { h, s: 0.0, l }).rgb();
        prop_assert!(r == g && g == b);
    }

    #[test]
    fn oversized_lightness_never_panics(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 100.0f64..200.0) {
        let hex = hsl_to_hex(h, s, l);
        prop_assert!(hex.len() == 7 && hex.starts_with('#'));
    }
}
