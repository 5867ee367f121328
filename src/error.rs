//! Errors raised by the palette engine.

use thiserror::Error;

/// Errors that can occur while converting or generating colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Invalid hex color '{0}': expected #rrggbb")]
    Format(String),

    #[error("No color source available")]
    SourceUnavailable,

    #[error("Unknown harmony rule '{0}': expected random, monochromatic, complementary or triadic")]
    UnknownRule(String),
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
