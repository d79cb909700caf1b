//! Test fixtures for tagkeeper: JSON notification/catalog datasets and
//! recording gateway doubles with scriptable failures.

pub mod fakes;

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;

use tagkeeper_core::models::{CatalogRecord, ChangeNotification, TagSet};

pub use fakes::{FakeCatalog, FakeRemediator, FakeReporter};

/// Root directory of the fixture datasets.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Deserialize `data/<relative_path>`. Test-only: a missing or malformed
/// fixture is a broken test, so this panics naming the offending file.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => panic!("fixture {} unreadable: {e}", path.display()),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => panic!("fixture {} does not match the expected shape: {e}", path.display()),
    }
}

/// Load a notification from `data/notifications/<name>.json`.
pub fn load_notification(name: &str) -> ChangeNotification {
    load_fixture(&format!("notifications/{name}.json"))
}

/// Load the reference catalog from `data/catalog/records.json`.
pub fn load_catalog() -> Vec<CatalogRecord> {
    load_fixture("catalog/records.json")
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Tag set with the three mandatory keys.
pub fn tags(environment: &str, department: &str, object_id: &str) -> TagSet {
    TagSet::new()
        .with("Environment", environment)
        .with("Department", department)
        .with("ObjectId", object_id)
}

/// A notification for a fixed S3 bucket carrying `observed_tags`.
pub fn notification(observed_tags: TagSet) -> ChangeNotification {
    ChangeNotification {
        resource_id: "my-bucket".to_string(),
        resource_type: "AWS::S3::Bucket".to_string(),
        resource_arn: "arn:aws:s3:::my-bucket".to_string(),
        observed_tags,
        correlation_token: "result-token-1".to_string(),
        occurred_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}
