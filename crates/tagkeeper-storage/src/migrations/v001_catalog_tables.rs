//! v001: catalog_records.

use rusqlite::Connection;

use tagkeeper_core::errors::TagKeeperResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TagKeeperResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS catalog_records (
            catalog_name    TEXT NOT NULL,
            object_id       TEXT NOT NULL CHECK (length(object_id) > 0),
            tags            TEXT NOT NULL,
            updated_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (catalog_name, object_id)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
