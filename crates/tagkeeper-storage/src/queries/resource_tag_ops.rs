//! Applied resource tags: merge-apply and read back.

use chrono::Utc;
use rusqlite::{params, Connection};

use tagkeeper_core::errors::{StorageError, TagKeeperResult};
use tagkeeper_core::models::TagSet;

use super::format_ts;
use crate::to_storage_err;

/// Upsert every tag in `tags` onto `resource_arn`. Keys not in `tags` are untouched.
/// All-or-nothing.
pub fn apply_tags(conn: &Connection, resource_arn: &str, tags: &TagSet) -> TagKeeperResult<()> {
    if resource_arn.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "resource ARN must not be empty".to_string(),
        }
        .into());
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("apply_tags begin: {e}")))?;

    match apply_tags_inner(&tx, resource_arn, tags) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("apply_tags commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!(resource_arn, error = %rollback_err, "apply_tags rollback failed");
            }
            Err(e)
        }
    }
}

fn apply_tags_inner(conn: &Connection, resource_arn: &str, tags: &TagSet) -> TagKeeperResult<()> {
    let applied_at = format_ts(&Utc::now());
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO resource_tags (resource_arn, tag_key, tag_value, applied_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (resource_arn, tag_key)
             DO UPDATE SET tag_value = excluded.tag_value, applied_at = excluded.applied_at",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    for (key, value) in tags.iter() {
        stmt.execute(params![resource_arn, key, value, applied_at])
            .map_err(|e| to_storage_err(format!("apply_tags {key}: {e}")))?;
    }
    Ok(())
}

/// Current tags on `resource_arn` (empty when nothing was ever applied).
pub fn tags_for(conn: &Connection, resource_arn: &str) -> TagKeeperResult<TagSet> {
    let mut stmt = conn
        .prepare_cached("SELECT tag_key, tag_value FROM resource_tags WHERE resource_arn = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![resource_arn], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut tags = TagSet::new();
    for row in rows {
        let (key, value) = row.map_err(|e| to_storage_err(e.to_string()))?;
        tags.insert(key, value);
    }
    Ok(tags)
}
