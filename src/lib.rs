//! Palettr: color harmony palettes for the terminal.
pub mod color;
pub mod db;
pub mod error;
pub mod export;
pub mod harmony;
pub mod logging;
pub mod session;
pub mod source;
pub mod types;

pub use color::{Color, Hsl, hex_to_hsl, hsl_to_hex};
pub use error::PaletteError;
pub use harmony::{HarmonyRule, generate};
pub use session::PaletteSession;
pub use source::{ColorSource, RandomColorSource, ScriptedSource};
pub use types::{PALETTE_SIZE, Palette, PaletteId, SavedPalette};
