//! ComplianceEngine driven against SQLite for all three gateways.

use std::sync::Arc;

use tagkeeper_compliance::ComplianceEngine;
use tagkeeper_core::constants::DEFAULT_CATALOG_TABLE;
use tagkeeper_core::errors::{GatewayError, TagKeeperError};
use tagkeeper_core::models::{CatalogRecord, ComplianceType, InvocationStatus};
use tagkeeper_core::traits::ICatalogGateway;
use tagkeeper_storage::StorageEngine;
use test_fixtures::{load_catalog, load_notification, notification, tags};

fn setup() -> (Arc<StorageEngine>, ComplianceEngine) {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    for record in load_catalog() {
        storage.put_record(&record).unwrap();
    }
    let engine = ComplianceEngine::new(storage.clone(), storage.clone(), storage.clone());
    (storage, engine)
}

#[test]
fn matching_tags_report_compliant_without_remediation() {
    let (storage, engine) = setup();
    let n = load_notification("valid-tags");

    assert_eq!(engine.evaluate(&n).unwrap(), InvocationStatus::Conformant);
    assert!(storage.tags_for(&n.resource_arn).unwrap().is_empty());

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::Compliant);
    assert_eq!(entries[0].correlation_token, n.correlation_token);
    assert_eq!(entries[0].evaluation.ordering_timestamp, n.occurred_at);
}

#[test]
fn mismatch_applies_catalog_tags() {
    let (storage, engine) = setup();
    let n = load_notification("invalid-tags");
    let catalog = storage.get_record(n.object_id()).unwrap().unwrap();

    assert_eq!(engine.evaluate(&n).unwrap(), InvocationStatus::Conformant);
    assert_eq!(storage.tags_for(&n.resource_arn).unwrap(), catalog.tags);

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::Compliant);
}

#[test]
fn unknown_object_id_journals_non_compliant() {
    let (storage, engine) = setup();
    let n = load_notification("unknown-object-id");

    assert_eq!(engine.evaluate(&n).unwrap(), InvocationStatus::Unresolved);
    assert!(storage.tags_for(&n.resource_arn).unwrap().is_empty());

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::NonCompliant);
}

#[test]
fn empty_object_id_is_a_lookup_failure() {
    let (storage, engine) = setup();
    let n = load_notification("empty-object-id");

    let err = engine.evaluate(&n).unwrap_err();
    assert!(matches!(
        err,
        TagKeeperError::LookupFailed {
            source: GatewayError::InvalidRequest { .. },
            ..
        }
    ));
    assert!(!err.is_retryable());

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::NonCompliant);
}

#[test]
fn empty_arn_is_a_remediation_failure() {
    let (storage, engine) = setup();
    storage
        .put_record(&CatalogRecord::new("obj-77", tags("prod", "eng", "obj-77")))
        .unwrap();
    let mut n = notification(tags("dev", "eng", "obj-77"));
    n.resource_arn.clear();

    let err = engine.evaluate(&n).unwrap_err();
    assert!(matches!(err, TagKeeperError::RemediationFailed { .. }));

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::NonCompliant);
}

#[test]
fn re_evaluation_after_remediation_is_stable() {
    let (storage, engine) = setup();
    let n = load_notification("invalid-tags");

    engine.evaluate(&n).unwrap();
    engine.evaluate(&n).unwrap();

    let catalog = storage.get_record(n.object_id()).unwrap().unwrap();
    assert_eq!(storage.tags_for(&n.resource_arn).unwrap(), catalog.tags);
    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .all(|e| e.evaluation.compliance == ComplianceType::Compliant));
}

#[test]
fn parallel_evaluations_share_one_store() {
    let (storage, engine) = setup();
    let notifications = vec![
        load_notification("valid-tags"),
        load_notification("invalid-tags"),
        load_notification("unknown-object-id"),
    ];

    let results = engine.evaluate_all(&notifications);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(storage.evaluation_count().unwrap(), 3);
}

fn open_with_raw_catalog_row(object_id: &str, tags_json: &str) -> (tempfile::TempDir, StorageEngine) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.db");
    drop(StorageEngine::open(&path).unwrap());

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO catalog_records (catalog_name, object_id, tags, updated_at)
         VALUES (?1, ?2, ?3, '2024-05-01T00:00:00.000Z')",
        rusqlite::params![DEFAULT_CATALOG_TABLE, object_id, tags_json],
    )
    .unwrap();
    drop(conn);

    let storage = StorageEngine::open(&path).unwrap();
    (dir, storage)
}

#[test]
fn corrupt_catalog_row_is_not_retryable() {
    let (_dir, storage) = open_with_raw_catalog_row("X", "not json");
    let storage = Arc::new(storage);
    let engine = ComplianceEngine::new(storage.clone(), storage.clone(), storage.clone());
    let n = notification(tags("prod", "eng", "X"));

    let err = engine.evaluate(&n).unwrap_err();
    assert!(matches!(
        err,
        TagKeeperError::LookupFailed {
            source: GatewayError::InvalidRequest { .. },
            ..
        }
    ));
    assert!(!err.is_retryable());

    let entries = storage.evaluations_for(&n.resource_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].evaluation.compliance, ComplianceType::NonCompliant);
}

#[test]
fn sqlite_failure_stays_retryable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropped.db");
    let storage = StorageEngine::open(&path).unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("DROP TABLE catalog_records;").unwrap();
    drop(conn);

    let err = storage.get("X").unwrap_err();
    assert!(err.is_transient());
}
