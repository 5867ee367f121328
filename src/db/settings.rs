/// Key/value preferences that outlive a session.
use anyhow::Result;
use log::warn;
use rusqlite::Connection;

use crate::harmony::HarmonyRule;

const RULE_KEY: &str = "harmony_rule";

pub fn save_rule(rule: HarmonyRule, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (RULE_KEY, rule.as_str()),
    )?;
    Ok(())
}

/// The last saved rule. Unknown stored values count as unset.
pub fn load_rule(conn: &Connection) -> Result<Option<HarmonyRule>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query([RULE_KEY])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let value: String = row.get(0)?;
    match value.parse() {
        Ok(rule) => Ok(Some(rule)),
        Err(err) => {
            warn!("ignoring stored rule: {err}");
            Ok(None)
        }
    }
}
