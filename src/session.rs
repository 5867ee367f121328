//! The currently displayed palette and the rule that produced it.
use log::debug;

use crate::error::Result;
use crate::harmony::{self, HarmonyRule};
use crate::source::ColorSource;
use crate::types::Palette;

/// Owns the active rule, the active palette and the color source feeding it.
///
/// Every mutation builds a complete new palette first and only then swaps it
/// in, so a failed generation leaves the session as it was.
pub struct PaletteSession<S> {
    rule: HarmonyRule,
    palette: Palette,
    source: S,
}

impl<S: ColorSource> PaletteSession<S> {
    /// Creates a session and renders its first palette.
    pub fn new(rule: HarmonyRule, mut source: S) -> Result<Self> {
        let palette = harmony::generate(rule, None, &mut source)?;
        Ok(Self {
            rule,
            palette,
            source,
        })
    }

    pub fn rule(&self) -> HarmonyRule {
        self.rule
    }

    pub fn current_palette(&self) -> &Palette {
        &self.palette
    }

    /// Switches rule and regenerates from a fresh random base.
    pub fn set_rule(&mut self, rule: HarmonyRule) -> Result<()> {
        let palette = harmony::generate(rule, None, &mut self.source)?;
        debug!("rule changed {} -> {}", self.rule, rule);
        self.rule = rule;
        self.palette = palette;
        Ok(())
    }

    /// Regenerates under the current rule from a fresh random base.
    pub fn regenerate(&mut self) -> Result<()> {
        self.palette = harmony::generate(self.rule, None, &mut self.source)?;
        debug!(
            "regenerated {} palette: {}",
            self.rule,
            self.palette.hex_strings().join(" ")
        );
        Ok(())
    }

    /// Shows a previously generated palette, adopting its rule.
    pub fn restore(&mut self, palette: Palette) {
        self.rule = palette.rule;
        self.palette = palette;
    }
}
