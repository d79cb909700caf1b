//! Evaluation journal: append and list per resource.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use tagkeeper_core::errors::{StorageError, TagKeeperResult};
use tagkeeper_core::models::{ComplianceType, Evaluation};

use super::{format_ts, parse_ts};
use crate::to_storage_err;

/// A journaled evaluation with its delivery metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: i64,
    pub evaluation: Evaluation,
    pub correlation_token: String,
    pub recorded_at: DateTime<Utc>,
}

pub fn append(
    conn: &Connection,
    evaluation: &Evaluation,
    correlation_token: &str,
) -> TagKeeperResult<i64> {
    conn.execute(
        "INSERT INTO evaluations (
            resource_id, resource_type, compliance, annotation,
            ordering_timestamp, correlation_token, recorded_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            evaluation.resource_id,
            evaluation.resource_type,
            evaluation.compliance.as_str(),
            evaluation.annotation,
            format_ts(&evaluation.ordering_timestamp),
            correlation_token,
            format_ts(&Utc::now()),
        ],
    )
    .map_err(|e| to_storage_err(format!("append evaluation: {e}")))?;
    Ok(conn.last_insert_rowid())
}

/// All entries for `resource_id`, oldest ordering timestamp first.
pub fn entries_for(conn: &Connection, resource_id: &str) -> TagKeeperResult<Vec<JournalEntry>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, resource_id, resource_type, compliance, annotation,
                    ordering_timestamp, correlation_token, recorded_at
             FROM evaluations
             WHERE resource_id = ?1
             ORDER BY ordering_timestamp ASC, id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![resource_id], |row| {
            Ok(RawEntry {
                id: row.get(0)?,
                resource_id: row.get(1)?,
                resource_type: row.get(2)?,
                compliance: row.get(3)?,
                annotation: row.get(4)?,
                ordering_timestamp: row.get(5)?,
                correlation_token: row.get(6)?,
                recorded_at: row.get(7)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        entries.push(raw.into_entry()?);
    }
    Ok(entries)
}

pub fn count(conn: &Connection) -> TagKeeperResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM evaluations", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

struct RawEntry {
    id: i64,
    resource_id: String,
    resource_type: String,
    compliance: String,
    annotation: String,
    ordering_timestamp: String,
    correlation_token: String,
    recorded_at: String,
}

impl RawEntry {
    fn into_entry(self) -> TagKeeperResult<JournalEntry> {
        let key = format!("evaluation {}", self.id);
        let compliance: ComplianceType =
            self.compliance
                .parse()
                .map_err(|details| StorageError::CorruptRow {
                    key: key.clone(),
                    details,
                })?;
        Ok(JournalEntry {
            id: self.id,
            evaluation: Evaluation {
                resource_id: self.resource_id,
                resource_type: self.resource_type,
                compliance,
                annotation: self.annotation,
                ordering_timestamp: parse_ts(&key, &self.ordering_timestamp)?,
            },
            correlation_token: self.correlation_token,
            recorded_at: parse_ts(&key, &self.recorded_at)?,
        })
    }
}
