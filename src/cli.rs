/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use palettr::{
    Color, ColorSource, HarmonyRule, Hsl, Palette, PaletteId, db, export, harmony,
};
use rusqlite::Connection;

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal color palette generator"
)]
pub struct Cli {
    /// SQLite database holding saved palettes and preferences
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<String>,

    /// trace, debug, info, warn, error or off
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Harmony rule; defaults to the last rule picked in the TUI
    #[arg(short, long, global = true, value_name = "RULE")]
    pub rule: Option<HarmonyRule>,

    /// Seed for reproducible colors
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Where exported JSON files go; defaults to the downloads directory
    #[arg(long, global = true, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a new palette
    Generate {
        /// Base color (#rrggbb); random when omitted
        #[arg(short, long)]
        base: Option<Color>,
        /// Print the export JSON instead of one color per line
        #[arg(long)]
        json: bool,
        /// Also store the palette in the library
        #[arg(long)]
        save: bool,
    },
    /// Show a hex color as rgb and hsl
    Convert { color: Color },
    /// Encode hue (degrees), saturation and lightness (percent) as hex
    Hsl {
        #[arg(allow_negative_numbers = true)]
        h: f64,
        s: f64,
        l: f64,
    },
    /// Write a palette to a JSON file
    Export {
        /// Saved palette to export; a fresh palette is generated when omitted
        #[arg(long)]
        id: Option<PaletteId>,
    },
    /// Manage the library of saved palettes
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved palettes, newest first
    List,
    /// Remove a saved palette
    Delete { id: PaletteId },
}

/// Execute a CLI command.
pub fn run<S: ColorSource>(
    command: Command,
    rule: HarmonyRule,
    source: &mut S,
    export_dir: PathBuf,
    conn: &Connection,
) -> Result<()> {
    match command {
        Command::Generate { base, json, save } => {
            handle_generate(rule, base, json, save, source, conn)?
        }
        Command::Convert { color } => handle_convert(color),
        Command::Hsl { h, s, l } => println!("{}", Color::from_hsl(Hsl { h, s, l })),
        Command::Export { id } => handle_export(id, rule, source, export_dir, conn)?,
        Command::Saved {
            command: SavedCommand::List,
        } => handle_saved_list(conn)?,
        Command::Saved {
            command: SavedCommand::Delete { id },
        } => handle_saved_delete(id, conn)?,
    }
    Ok(())
}

fn handle_generate<S: ColorSource>(
    rule: HarmonyRule,
    base: Option<Color>,
    json: bool,
    save: bool,
    source: &mut S,
    conn: &Connection,
) -> Result<()> {
    if base.is_some() && !rule.uses_base() {
        eprintln!("Note: the random rule ignores --base.");
    }
    let palette = harmony::generate(rule, base, source)?;
    info!("generated {rule} palette from the command line");
    if json {
        println!("{}", export::export_json(&palette)?);
    } else {
        for color in &palette.colors {
            println!("{color}");
        }
    }
    if save {
        let id = db::create_palette(&palette, conn)?;
        println!("Saved palette #{id}");
    }
    Ok(())
}

fn handle_convert(color: Color) {
    let (r, g, b) = color.rgb();
    println!("{color}");
    println!("rgb({r}, {g}, {b})");
    println!("{}", color.to_hsl());
}

fn handle_export<S: ColorSource>(
    id: Option<PaletteId>,
    rule: HarmonyRule,
    source: &mut S,
    export_dir: PathBuf,
    conn: &Connection,
) -> Result<()> {
    let palette: Palette = match id {
        Some(id) => match db::query_palette_by_id(id, conn)? {
            Some(saved) => saved.palette,
            None => bail!("Palette #{id} not found"),
        },
        None => harmony::generate(rule, None, source)?,
    };
    let path = export::export_to_dir(&palette, &export_dir)?;
    println!("{}", path.display());
    Ok(())
}

fn handle_saved_list(conn: &Connection) -> Result<()> {
    let saved = db::query_palettes(conn)?;
    if saved.is_empty() {
        println!("No saved palettes.");
        return Ok(());
    }
    for entry in saved {
        println!(
            "#{:<4} {:<14} {}  {}",
            entry.id.unwrap_or_default(),
            entry.palette.rule,
            entry.palette.created_at.format("%Y-%m-%d %H:%M"),
            entry.palette.hex_strings().join(" ")
        );
    }
    Ok(())
}

fn handle_saved_delete(id: PaletteId, conn: &Connection) -> Result<()> {
    if db::delete_palette(id, conn)? {
        println!("Deleted palette #{id}");
    } else {
        bail!("Palette #{id} not found");
    }
    Ok(())
}
