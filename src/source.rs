//! Sources of base colors for palette generation.
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::color::Color;
use crate::error::{PaletteError, Result};

const MAX_COLOR: u32 = 0xFF_FFFF;

/// Anything that can hand out colors one at a time.
pub trait ColorSource {
    fn next_color(&mut self) -> Result<Color>;
}

/// Uniform random colors over all 2^24 RGB values.
#[derive(Debug)]
pub struct RandomColorSource<R> {
    rng: R,
}

impl<R: RngExt> RandomColorSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColorSource<StdRng> {
    /// Reproducible source: the same seed yields the same colors.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds a `StdRng` from the thread-local generator.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }
}

impl<R: RngExt> ColorSource for RandomColorSource<R> {
    fn next_color(&mut self) -> Result<Color> {
        Ok(Color::from_u24(self.rng.random_range(0..=MAX_COLOR)))
    }
}

/// Replays a fixed list of colors, then reports `SourceUnavailable`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    colors: VecDeque<Color>,
}

impl ScriptedSource {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.colors.len()
    }
}

impl ColorSource for ScriptedSource {
    fn next_color(&mut self) -> Result<Color> {
        self.colors.pop_front().ok_or(PaletteError::SourceUnavailable)
    }
}
