//! Harmony rules: deriving six related colors from one base color.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::{Color, Hsl};
use crate::error::{PaletteError, Result};
use crate::source::ColorSource;
use crate::types::{PALETTE_SIZE, Palette};

const MONOCHROMATIC_LIGHTNESS: [f64; PALETTE_SIZE] = [20.0, 35.0, 50.0, 65.0, 80.0, 95.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    #[default]
    Random,
    Monochromatic,
    Complementary,
    Triadic,
}

impl HarmonyRule {
    pub const ALL: [HarmonyRule; 4] = [
        HarmonyRule::Random,
        HarmonyRule::Monochromatic,
        HarmonyRule::Complementary,
        HarmonyRule::Triadic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyRule::Random => "random",
            HarmonyRule::Monochromatic => "monochromatic",
            HarmonyRule::Complementary => "complementary",
            HarmonyRule::Triadic => "triadic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HarmonyRule::Random => "Random",
            HarmonyRule::Monochromatic => "Monochromatic",
            HarmonyRule::Complementary => "Complementary",
            HarmonyRule::Triadic => "Triadic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HarmonyRule::Random => "Completely random colors for creative inspiration",
            HarmonyRule::Monochromatic => "Uses different shades of the same hue",
            HarmonyRule::Complementary => "Uses colors opposite on the color wheel",
            HarmonyRule::Triadic => "Uses three evenly spaced colors on the color wheel",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|rule| *rule == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the rule derives its colors from a base color.
    pub fn uses_base(self) -> bool {
        self != HarmonyRule::Random
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyRule {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == wanted)
            .ok_or_else(|| PaletteError::UnknownRule(s.to_string()))
    }
}

/// Builds a palette under `rule`. A missing base is drawn from `source`;
/// the random rule ignores `base` and draws all six colors.
pub fn generate<S: ColorSource + ?Sized>(
    rule: HarmonyRule,
    base: Option<Color>,
    source: &mut S,
) -> Result<Palette> {
    let colors = match rule {
        HarmonyRule::Random => random(source)?,
        HarmonyRule::Monochromatic => monochromatic(base_or_draw(base, source)?),
        HarmonyRule::Complementary => complementary(base_or_draw(base, source)?),
        HarmonyRule::Triadic => triadic(base_or_draw(base, source)?),
    };
    Ok(Palette::new(rule, colors))
}

fn base_or_draw<S: ColorSource + ?Sized>(base: Option<Color>, source: &mut S) -> Result<Color> {
    match base {
        Some(color) => Ok(color),
        None => source.next_color(),
    }
}

fn random<S: ColorSource + ?Sized>(source: &mut S) -> Result<[Color; PALETTE_SIZE]> {
    let mut colors = [Color::from_u24(0); PALETTE_SIZE];
    for slot in &mut colors {
        *slot = source.next_color()?;
    }
    Ok(colors)
}

fn monochromatic(base: Color) -> [Color; PALETTE_SIZE] {
    let Hsl { h, s, .. } = base.to_hsl();
    MONOCHROMATIC_LIGHTNESS.map(|l| Color::from_hsl(Hsl { h, s, l }))
}

fn complementary(base: Color) -> [Color; PALETTE_SIZE] {
    let Hsl { h, s, l } = base.to_hsl();
    let opposite = (h + 180.0) % 360.0;
    [
        base,
        encode(opposite, s, l),
        encode(h, s * 0.7, l * 0.8),
        encode(opposite, s * 0.7, l * 0.8),
        encode(h, s * 0.4, l * 1.2),
        encode(opposite, s * 0.4, l * 1.2),
    ]
}

fn triadic(base: Color) -> [Color; PALETTE_SIZE] {
    let Hsl { h, s, l } = base.to_hsl();
    let second = (h + 120.0) % 360.0;
    let third = (h + 240.0) % 360.0;
    [
        base,
        encode(second, s, l),
        encode(third, s, l),
        encode(h, s * 0.6, l * 0.8),
        encode(second, s * 0.6, l * 0.8),
        encode(third, s * 0.6, l * 0.8),
    ]
}

fn encode(h: f64, s: f64, l: f64) -> Color {
    Color::from_hsl(Hsl { h, s, l })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_round_trip() {
        for rule in HarmonyRule::ALL {
            assert_eq!(rule.as_str().parse::<HarmonyRule>().unwrap(), rule);
        }
        assert_eq!(" Triadic ".parse::<HarmonyRule>().unwrap(), HarmonyRule::Triadic);
        assert_eq!(
            "analogous".parse::<HarmonyRule>(),
            Err(PaletteError::UnknownRule("analogous".to_string()))
        );
    }

    #[test]
    fn rules_cycle_in_display_order() {
        assert_eq!(HarmonyRule::Random.next(), HarmonyRule::Monochromatic);
        assert_eq!(HarmonyRule::Triadic.next(), HarmonyRule::Random);
        assert_eq!(HarmonyRule::Random.prev(), HarmonyRule::Triadic);
        assert_eq!(HarmonyRule::Complementary.index(), 2);
    }

    #[test]
    fn rule_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HarmonyRule::Complementary).unwrap(),
            "\"complementary\""
        );
    }
}
