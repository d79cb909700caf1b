//! v003: evaluations journal.

use rusqlite::Connection;

use tagkeeper_core::errors::TagKeeperResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TagKeeperResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS evaluations (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            resource_id         TEXT NOT NULL,
            resource_type       TEXT NOT NULL,
            compliance          TEXT NOT NULL CHECK (compliance IN ('COMPLIANT', 'NON_COMPLIANT')),
            annotation          TEXT NOT NULL,
            ordering_timestamp  TEXT NOT NULL,
            correlation_token   TEXT NOT NULL,
            recorded_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_evaluations_resource
            ON evaluations(resource_id, ordering_timestamp);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
