/// Database module with saved palette and settings queries plus migrations.
mod migrations;
mod palette;
mod settings;

use anyhow::Result;
use rusqlite::Connection;

pub use palette::{create_palette, delete_palette, query_palette_by_id, query_palettes};
pub use settings::{load_rule, save_rule};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// In-memory database with the full schema.
pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./palettr.db` when no data dir is found.
pub fn default_db_path() -> String {
    if let Some(data_dir) = dirs::data_local_dir() {
        let palettr_dir = data_dir.join("palettr");
        std::fs::create_dir_all(&palettr_dir).ok();
        palettr_dir.join("palettr.db").to_string_lossy().into_owned()
    } else {
        "palettr.db".to_string()
    }
}
