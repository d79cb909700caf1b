use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Logical table holding catalog records.
    pub table_name: String,
    /// Region of the catalog and tagging services.
    pub region: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            table_name: defaults::DEFAULT_CATALOG_TABLE.to_string(),
            region: defaults::DEFAULT_REGION.to_string(),
        }
    }
}
