//! Default values for every config section.

use crate::constants;

pub const DEFAULT_CATALOG_TABLE: &str = constants::DEFAULT_CATALOG_TABLE;
pub const DEFAULT_REGION: &str = constants::DEFAULT_REGION;

pub const DEFAULT_DB_PATH: &str = "tagkeeper.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_COMPLIANT_ANNOTATION: &str = constants::ANNOTATION_COMPLIANT;
pub const DEFAULT_NON_COMPLIANT_ANNOTATION: &str = constants::ANNOTATION_MISSING_TAGS;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn default_required_keys() -> Vec<String> {
    constants::REQUIRED_TAGS
        .iter()
        .map(|k| k.to_string())
        .collect()
}
