use palettr::color::hsl_to_rgb;
use palettr::{
    Color, ColorSource, HarmonyRule, Hsl, PALETTE_SIZE, PaletteError, RandomColorSource,
    ScriptedSource, generate,
};

fn hex(value: &str) -> Color {
    value.parse().unwrap()
}

fn hexes(colors: &[Color]) -> Vec<String> {
    colors.iter().map(Color::to_string).collect()
}

fn is_hex(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .bytes()
            .all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f'))
}

/// Each channel of `color` is the rounded value of `hsl` (within half a level).
fn assert_quantized(color: Color, hsl: Hsl) {
    let (r, g, b) = color.rgb();
    let (er, eg, eb) = hsl_to_rgb(hsl);
    for (actual, expected) in [(r, er), (g, eg), (b, eb)] {
        let expected = (expected * 255.0).clamp(0.0, 255.0);
        assert!(
            (actual as f64 - expected).abs() <= 0.5 + 1e-9,
            "{color} is not {hsl:?}"
        );
    }
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

#[test]
fn every_rule_yields_six_hex_colors() {
    let mut source = RandomColorSource::seeded(11);
    for rule in HarmonyRule::ALL {
        for _ in 0..50 {
            let palette = generate(rule, None, &mut source).unwrap();
            assert_eq!(palette.rule, rule);
            assert_eq!(palette.colors.len(), PALETTE_SIZE);
            for color in palette.hex_strings() {
                assert!(is_hex(&color), "{color}");
            }
        }
    }
}

#[test]
fn random_rule_draws_six_colors_in_order_and_ignores_base() {
    let script = ["#000001", "#000002", "#000003", "#000004", "#000005", "#000006"];
    let mut source = ScriptedSource::new(script.map(hex));
    let palette = generate(HarmonyRule::Random, Some(hex("#ffffff")), &mut source).unwrap();
    assert_eq!(hexes(&palette.colors), script);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn monochromatic_from_violet_base() {
    let base = hex("#8b5cf6");
    let palette = generate(HarmonyRule::Monochromatic, Some(base), &mut ScriptedSource::default())
        .unwrap();
    assert_eq!(
        hexes(&palette.colors),
        ["#210561", "#3a09a9", "#530df2", "#8756f6", "#ba9efa", "#eee7fe"]
    );

    let Hsl { h, s, .. } = base.to_hsl();
    let mut previous = 0.0;
    for (color, l) in palette.colors.iter().zip([20.0, 35.0, 50.0, 65.0, 80.0, 95.0]) {
        assert_quantized(*color, Hsl { h, s, l });
        let decoded = color.to_hsl();
        assert!((decoded.l - l).abs() < 0.5, "{color}: {decoded:?}");
        assert!(decoded.l > previous);
        previous = decoded.l;
    }
    let mid = palette.colors[2].to_hsl();
    assert!(hue_distance(mid.h, 258.31) < 0.5, "{mid:?}");
    assert!((mid.s - 89.53).abs() < 1.0, "{mid:?}");
}

#[test]
fn monochromatic_keeps_hue_and_saturation_for_any_base() {
    let mut bases = RandomColorSource::seeded(5);
    for _ in 0..200 {
        let base = bases.next_color().unwrap();
        let Hsl { h, s, .. } = base.to_hsl();
        let palette =
            generate(HarmonyRule::Monochromatic, Some(base), &mut ScriptedSource::default())
                .unwrap();
        for (color, l) in palette.colors.iter().zip([20.0, 35.0, 50.0, 65.0, 80.0, 95.0]) {
            assert_quantized(*color, Hsl { h, s, l });
        }
    }
}

#[test]
fn complementary_order_and_opposite_hue() {
    let palette = generate(
        HarmonyRule::Complementary,
        Some(hex("#3366cc")),
        &mut ScriptedSource::default(),
    )
    .unwrap();
    assert_eq!(
        hexes(&palette.colors),
        ["#3366cc", "#cc9933", "#3b5891", "#91743b", "#8191b1", "#b1a181"]
    );

    let first = palette.colors[0].to_hsl();
    let second = palette.colors[1].to_hsl();
    assert!((hue_distance(first.h, second.h) - 180.0).abs() < 1.0);
}

#[test]
fn complementary_clamps_bright_variants_to_white() {
    let base = hex("#e5f6ff");
    let palette =
        generate(HarmonyRule::Complementary, Some(base), &mut ScriptedSource::default()).unwrap();
    assert_eq!(
        hexes(&palette.colors),
        ["#e5f6ff", "#ffeee5", "#97cfed", "#edb497", "#ffffff", "#ffffff"]
    );
    assert!(palette.colors[4].to_hsl().l >= 99.9);

    let white = generate(
        HarmonyRule::Complementary,
        Some(hex("#ffffff")),
        &mut ScriptedSource::default(),
    )
    .unwrap();
    assert_eq!(
        hexes(&white.colors),
        ["#ffffff", "#ffffff", "#cccccc", "#cccccc", "#ffffff", "#ffffff"]
    );
}

#[test]
fn complementary_matches_opposite_hue_for_any_base() {
    let mut bases = RandomColorSource::seeded(17);
    for _ in 0..200 {
        let base = bases.next_color().unwrap();
        let Hsl { h, s, l } = base.to_hsl();
        let opposite = (h + 180.0) % 360.0;
        let palette =
            generate(HarmonyRule::Complementary, Some(base), &mut ScriptedSource::default())
                .unwrap();
        assert_eq!(palette.colors[0], base);
        let expected = [
            Hsl { h: opposite, s, l },
            Hsl { h, s: s * 0.7, l: l * 0.8 },
            Hsl { h: opposite, s: s * 0.7, l: l * 0.8 },
            Hsl { h, s: s * 0.4, l: l * 1.2 },
            Hsl { h: opposite, s: s * 0.4, l: l * 1.2 },
        ];
        for (color, hsl) in palette.colors[1..].iter().zip(expected) {
            assert_quantized(*color, hsl);
        }
    }
}

#[test]
fn triadic_matches_spaced_hues_for_any_base() {
    let mut bases = RandomColorSource::seeded(23);
    for _ in 0..200 {
        let base = bases.next_color().unwrap();
        let Hsl { h, s, l } = base.to_hsl();
        let second = (h + 120.0) % 360.0;
        let third = (h + 240.0) % 360.0;
        let palette =
            generate(HarmonyRule::Triadic, Some(base), &mut ScriptedSource::default()).unwrap();
        assert_eq!(palette.colors[0], base);
        let expected = [
            Hsl { h: second, s, l },
            Hsl { h: third, s, l },
            Hsl { h, s: s * 0.6, l: l * 0.8 },
            Hsl { h: second, s: s * 0.6, l: l * 0.8 },
            Hsl { h: third, s: s * 0.6, l: l * 0.8 },
        ];
        for (color, hsl) in palette.colors[1..].iter().zip(expected) {
            assert_quantized(*color, hsl);
        }
    }
}

#[test]
fn triadic_order_and_spacing() {
    let palette =
        generate(HarmonyRule::Triadic, Some(hex("#ff0000")), &mut ScriptedSource::default())
            .unwrap();
    assert_eq!(
        hexes(&palette.colors),
        ["#ff0000", "#00ff00", "#0000ff", "#a32929", "#29a329", "#2929a3"]
    );

    let violet =
        generate(HarmonyRule::Triadic, Some(hex("#8b5cf6")), &mut ScriptedSource::default())
            .unwrap();
    assert_eq!(
        hexes(&violet.colors),
        ["#8b5cf6", "#f68b5c", "#5cf68b", "#6e47c8", "#c86e47", "#47c86e"]
    );
    let hues: Vec<f64> = violet.colors[..3].iter().map(|c| c.to_hsl().h).collect();
    assert!((hue_distance(hues[0], hues[1]) - 120.0).abs() < 1.0);
    assert!((hue_distance(hues[1], hues[2]) - 120.0).abs() < 1.0);
    assert!((hue_distance(hues[0], hues[2]) - 120.0).abs() < 1.0);
}

#[test]
fn missing_base_is_drawn_from_source() {
    let mut source = ScriptedSource::new([hex("#3366cc"), hex("#ff0000")]);
    let palette = generate(HarmonyRule::Triadic, None, &mut source).unwrap();
    assert_eq!(palette.colors[0], hex("#3366cc"));
    assert_eq!(source.remaining(), 1);
}

#[test]
fn exhausted_source_is_unavailable() {
    for rule in HarmonyRule::ALL {
        let result = generate(rule, None, &mut ScriptedSource::default());
        assert_eq!(result.unwrap_err(), PaletteError::SourceUnavailable);
    }

    let mut short = ScriptedSource::new([hex("#000001"), hex("#000002")]);
    assert_eq!(
        generate(HarmonyRule::Random, None, &mut short).unwrap_err(),
        PaletteError::SourceUnavailable
    );
}

#[test]
fn seeded_generation_is_reproducible() {
    let first = generate(HarmonyRule::Complementary, None, &mut RandomColorSource::seeded(99))
        .unwrap();
    let second = generate(HarmonyRule::Complementary, None, &mut RandomColorSource::seeded(99))
        .unwrap();
    assert_eq!(first.colors, second.colors);
}
