//! SQL for each table, as free functions over a `Connection`.

pub mod catalog_ops;
pub mod evaluation_ops;
pub mod resource_tag_ops;

use chrono::{DateTime, SecondsFormat, Utc};

use tagkeeper_core::errors::{StorageError, TagKeeperResult};

/// Fixed-width UTC timestamps so lexical order equals chronological order.
pub(crate) fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_ts(key: &str, raw: &str) -> TagKeeperResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::CorruptRow {
                key: key.to_string(),
                details: format!("bad timestamp '{raw}': {e}"),
            }
            .into()
        })
}
