use chrono::{DateTime, Local};
use serde::Serialize;

use crate::color::Color;
use crate::harmony::HarmonyRule;

pub type PaletteId = u32;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 6;

/// One generated palette. Replaced wholesale on regeneration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    #[serde(rename = "type")]
    pub rule: HarmonyRule,
    pub colors: [Color; PALETTE_SIZE],
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Local>,
}

impl Palette {
    pub fn new(rule: HarmonyRule, colors: [Color; PALETTE_SIZE]) -> Self {
        Self {
            rule,
            colors,
            created_at: Local::now(),
        }
    }

    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_string).collect()
    }
}

/// A palette stored in the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedPalette {
    pub id: Option<PaletteId>,
    pub palette: Palette,
}
