//! v002: resource_tags.

use rusqlite::Connection;

use tagkeeper_core::errors::TagKeeperResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TagKeeperResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS resource_tags (
            resource_arn    TEXT NOT NULL,
            tag_key         TEXT NOT NULL CHECK (length(tag_key) BETWEEN 1 AND 128),
            tag_value       TEXT NOT NULL CHECK (length(tag_value) <= 256),
            applied_at      TEXT NOT NULL,
            PRIMARY KEY (resource_arn, tag_key)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
