mod app;
mod cli;
mod event;
mod tui;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::warn;
use palettr::{HarmonyRule, PaletteSession, RandomColorSource, db, logging};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();

    let log_dir = cli_opts
        .log_dir
        .clone()
        .unwrap_or_else(logging::default_log_dir);
    let log_level = cli_opts
        .log_level
        .as_deref()
        .unwrap_or(logging::default_log_level());
    let _logger = logging::init_logging(log_level, &log_dir)?;

    let db_path = cli_opts.db.clone().unwrap_or_else(db::default_db_path);
    let conn = db::init(&db_path)?;

    let mut source = match cli_opts.seed {
        Some(seed) => RandomColorSource::seeded(seed),
        None => RandomColorSource::from_entropy(),
    };
    let rule = match cli_opts.rule {
        Some(rule) => rule,
        None => match db::load_rule(&conn) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!("could not read stored rule: {err:#}");
                HarmonyRule::default()
            }
        },
    };
    let export_dir = cli_opts
        .export_dir
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Some(command) = cli_opts.command {
        return cli::run(command, rule, &mut source, export_dir, &conn);
    }

    let session = PaletteSession::new(rule, source)?;
    let mut app = app::App::new(conn, session, export_dir);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
