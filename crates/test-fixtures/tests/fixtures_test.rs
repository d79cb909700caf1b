use tagkeeper_core::errors::GatewayError;
use tagkeeper_core::traits::{ICatalogGateway, IEvaluationReporter, IRemediationGateway};
use test_fixtures::*;

#[test]
fn every_notification_fixture_parses() {
    let files = list_fixtures("notifications");
    assert!(files.len() >= 4, "expected notification fixtures, found {files:?}");
    for file in files {
        let name = file.file_stem().unwrap().to_string_lossy().to_string();
        let n = load_notification(&name);
        assert!(!n.resource_arn.is_empty(), "{name} has no ARN");
        assert!(!n.correlation_token.is_empty(), "{name} has no token");
    }
}

#[test]
fn catalog_fixture_has_unique_non_empty_ids() {
    let records = load_catalog();
    let mut ids: Vec<_> = records.iter().map(|r| r.object_id.clone()).collect();
    assert!(ids.iter().all(|id| !id.is_empty()));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn fixture_exists_reports_missing_files() {
    assert!(fixture_exists("catalog/records.json"));
    assert!(!fixture_exists("catalog/nope.json"));
}

#[test]
fn fake_catalog_records_calls_and_failures() {
    let catalog = FakeCatalog::new().with_records(load_catalog());
    assert!(catalog.get("obj-0001").unwrap().is_found());
    assert!(!catalog.get("missing").unwrap().is_found());

    catalog.fail_with(GatewayError::transient("catalog", "throttled"));
    assert!(catalog.get("obj-0001").is_err());
    assert_eq!(catalog.calls(), vec!["obj-0001", "missing", "obj-0001"]);
}

#[test]
fn fake_remediator_and_reporter_record_even_when_failing() {
    let remediator = FakeRemediator::failing(GatewayError::permission_denied("remediation", "no"));
    assert!(remediator.apply("arn", &tags("a", "b", "c")).is_err());
    assert_eq!(remediator.call_count(), 1);
    assert_eq!(remediator.applied()[0].0, "arn");

    let reporter = FakeReporter::new();
    let evaluation = tagkeeper_core::models::Evaluation::for_notification(
        &notification(tags("a", "b", "c")),
        &tagkeeper_core::models::Verdict::compliant("ok"),
    );
    reporter.report(&evaluation, "tok").unwrap();
    assert_eq!(reporter.only_report(), evaluation);
    assert_eq!(reporter.reports()[0].1, "tok");
}
