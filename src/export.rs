//! JSON export of palettes.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::types::Palette;

/// Pretty JSON in the `{ type, colors, createdAt }` shape.
pub fn export_json(palette: &Palette) -> Result<String> {
    Ok(serde_json::to_string_pretty(palette)?)
}

/// File name carrying the palette's UTC creation date.
pub fn export_file_name(palette: &Palette) -> String {
    format!(
        "color-palette-{}.json",
        palette.created_at.with_timezone(&Utc).format("%Y-%m-%d")
    )
}

/// Writes the palette into `dir`, never overwriting an earlier export.
pub fn export_to_dir(palette: &Palette, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let file_name = export_file_name(palette);
    let mut path = dir.join(&file_name);
    let stem = file_name.trim_end_matches(".json");
    let mut counter = 1;
    while path.exists() {
        path = dir.join(format!("{stem}-{counter}.json"));
        counter += 1;
    }

    fs::write(&path, export_json(palette)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("exported {} palette to {}", palette.rule, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::color::Color;
    use crate::harmony::HarmonyRule;

    fn sample() -> Palette {
        Palette {
            rule: HarmonyRule::Triadic,
            colors: [
                0xff0000, 0x00ff00, 0x0000ff, 0xa32929, 0x29a329, 0x2929a3,
            ]
            .map(Color::from_u24),
            created_at: Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn json_has_type_colors_and_timestamp() {
        let json: serde_json::Value = serde_json::from_str(&export_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["type"], "triadic");
        assert_eq!(json["colors"][0], "#ff0000");
        assert_eq!(json["colors"].as_array().unwrap().len(), 6);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-03-09T14:30:00"));
    }

    #[test]
    fn file_name_uses_utc_date() {
        let mut palette = sample();
        palette.created_at = Utc
            .with_ymd_and_hms(2024, 3, 9, 23, 30, 0)
            .unwrap()
            .with_timezone(&Local);
        assert_eq!(export_file_name(&palette), "color-palette-2024-03-09.json");

        palette.created_at = Utc
            .with_ymd_and_hms(2024, 3, 10, 0, 30, 0)
            .unwrap()
            .with_timezone(&Local);
        assert_eq!(export_file_name(&palette), "color-palette-2024-03-10.json");
    }
}
