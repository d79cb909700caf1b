use serde::{Deserialize, Serialize};

use super::TagSet;

/// Reference tag set stored for an object id.
///
/// Maintained out-of-band; read-only during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogRecord {
    pub object_id: String,
    pub tags: TagSet,
}

impl CatalogRecord {
    pub fn new(object_id: impl Into<String>, tags: TagSet) -> Self {
        Self {
            object_id: object_id.into(),
            tags,
        }
    }
}

/// Outcome of a catalog lookup. A miss is a valid, non-error outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLookup {
    Found(CatalogRecord),
    NotFound,
}

impl CatalogLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_record(self) -> Option<CatalogRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

impl From<Option<CatalogRecord>> for CatalogLookup {
    fn from(record: Option<CatalogRecord>) -> Self {
        record.map_or(Self::NotFound, Self::Found)
    }
}
