//! Get, put, delete, and count catalog records.

use rusqlite::{params, Connection, OptionalExtension};

use tagkeeper_core::errors::{StorageError, TagKeeperResult};
use tagkeeper_core::models::{CatalogRecord, TagSet};

use crate::to_storage_err;

/// Fetch the record for `object_id` in `catalog_name`.
pub fn get_record(
    conn: &Connection,
    catalog_name: &str,
    object_id: &str,
) -> TagKeeperResult<Option<CatalogRecord>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT tags FROM catalog_records WHERE catalog_name = ?1 AND object_id = ?2",
            params![catalog_name, object_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(format!("get_record: {e}")))?;

    let Some(raw) = raw else {
        return Ok(None);
    };
    let tags: TagSet = serde_json::from_str(&raw).map_err(|e| StorageError::CorruptRow {
        key: object_id.to_string(),
        details: format!("tags column: {e}"),
    })?;
    Ok(Some(CatalogRecord::new(object_id, tags)))
}

/// Insert or replace a record.
pub fn put_record(
    conn: &Connection,
    catalog_name: &str,
    record: &CatalogRecord,
) -> TagKeeperResult<()> {
    if record.object_id.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "catalog object id must not be empty".to_string(),
        }
        .into());
    }
    let tags_json = serde_json::to_string(&record.tags)?;
    conn.execute(
        "INSERT INTO catalog_records (catalog_name, object_id, tags, updated_at)
         VALUES (?1, ?2, ?3, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
         ON CONFLICT (catalog_name, object_id)
         DO UPDATE SET tags = excluded.tags, updated_at = excluded.updated_at",
        params![catalog_name, record.object_id, tags_json],
    )
    .map_err(|e| to_storage_err(format!("put_record: {e}")))?;
    Ok(())
}

/// Delete a record. Returns whether a row was removed.
pub fn delete_record(conn: &Connection, catalog_name: &str, object_id: &str) -> TagKeeperResult<bool> {
    let removed = conn
        .execute(
            "DELETE FROM catalog_records WHERE catalog_name = ?1 AND object_id = ?2",
            params![catalog_name, object_id],
        )
        .map_err(|e| to_storage_err(format!("delete_record: {e}")))?;
    Ok(removed > 0)
}

pub fn count_records(conn: &Connection, catalog_name: &str) -> TagKeeperResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM catalog_records WHERE catalog_name = ?1",
            params![catalog_name],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(format!("count_records: {e}")))?;
    Ok(count as usize)
}
