//! Versioned schema migrations, applied in order and recorded in `schema_version`.

mod v001_catalog_tables;
mod v002_resource_tags;
mod v003_evaluation_journal;

use rusqlite::{params, Connection};

use tagkeeper_core::errors::{StorageError, TagKeeperResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> TagKeeperResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_catalog_tables::migrate),
    (2, v002_resource_tags::migrate),
    (3, v003_evaluation_journal::migrate),
];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Apply every pending migration. Returns the resulting schema version.
pub fn run_migrations(conn: &Connection) -> TagKeeperResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut version = current_version(conn)?;
    for &(target, migrate) in MIGRATIONS {
        if target <= version {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: target,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![target],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version = target, "applied migration");
        version = target;
    }
    Ok(version)
}

pub fn current_version(conn: &Connection) -> TagKeeperResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
