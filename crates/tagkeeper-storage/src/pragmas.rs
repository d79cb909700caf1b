//! PRAGMA configuration for file-backed connections.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout.

use rusqlite::Connection;

use tagkeeper_core::errors::TagKeeperResult;

use crate::to_storage_err;

pub fn apply_pragmas(conn: &Connection) -> TagKeeperResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// The journal mode SQLite reports for `conn`, lowercased (`wal`, `memory`, ...).
pub fn journal_mode(conn: &Connection) -> TagKeeperResult<String> {
    conn.query_row("PRAGMA journal_mode", [], |row| row.get::<_, String>(0))
        .map(|mode| mode.to_ascii_lowercase())
        .map_err(|e| to_storage_err(format!("journal_mode: {e}")))
}
