/// Saved palette queries.
use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use log::info;
use rusqlite::{Connection, Row};

use crate::color::Color;
use crate::types::{PALETTE_SIZE, Palette, PaletteId, SavedPalette};

pub fn create_palette(palette: &Palette, conn: &Connection) -> Result<PaletteId> {
    conn.execute(
        "INSERT INTO palettes (rule, colors, created_at) VALUES (?1, ?2, ?3)",
        (
            palette.rule.as_str(),
            serde_json::to_string(&palette.colors)?,
            palette
                .created_at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Nanos, true),
        ),
    )?;
    let palette_id = conn.last_insert_rowid() as PaletteId;
    info!("saved {} palette as #{palette_id}", palette.rule);
    Ok(palette_id)
}

/// All saved palettes, newest first.
///
/// Ordered on the parsed instants: rows written with a local offset do not
/// sort chronologically as text.
pub fn query_palettes(conn: &Connection) -> Result<Vec<SavedPalette>> {
    let mut stmt =
        conn.prepare("SELECT id, rule, colors, created_at FROM palettes ORDER BY id DESC")?;
    let rows = stmt.query_map([], read_row)?;
    let mut palettes = Vec::new();
    for row in rows {
        palettes.push(decode(row?)?);
    }
    palettes.sort_by(|a, b| b.palette.created_at.cmp(&a.palette.created_at));
    Ok(palettes)
}

pub fn query_palette_by_id(id: PaletteId, conn: &Connection) -> Result<Option<SavedPalette>> {
    let mut stmt =
        conn.prepare("SELECT id, rule, colors, created_at FROM palettes WHERE id = ?1")?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(decode(read_row(row)?)?))
    } else {
        Ok(None)
    }
}

/// Returns whether a palette with `id` existed.
pub fn delete_palette(id: PaletteId, conn: &Connection) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM palettes WHERE id = ?1", [id])?;
    if deleted > 0 {
        info!("deleted palette #{id}");
    }
    Ok(deleted > 0)
}

type RawPalette = (PaletteId, String, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawPalette> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn decode((id, rule, colors, created_at): RawPalette) -> Result<SavedPalette> {
    let colors: [Color; PALETTE_SIZE] = serde_json::from_str(&colors)
        .with_context(|| format!("palette #{id} has corrupt colors"))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .with_context(|| format!("palette #{id} has a corrupt timestamp"))?
        .with_timezone(&Local);
    Ok(SavedPalette {
        id: Some(id),
        palette: Palette {
            rule: rule.parse()?,
            colors,
            created_at,
        },
    })
}
