//! Recording gateway doubles.
//!
//! Each fake logs every call it receives and can be scripted to fail.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tagkeeper_core::errors::{GatewayError, GatewayResult};
use tagkeeper_core::models::{CatalogLookup, CatalogRecord, Evaluation, TagSet};
use tagkeeper_core::traits::{ICatalogGateway, IEvaluationReporter, IRemediationGateway};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory catalog keyed by object id.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    records: Mutex<HashMap<String, CatalogRecord>>,
    failure: Mutex<Option<GatewayError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, record: CatalogRecord) -> Self {
        self.insert(record);
        self
    }

    pub fn with_records(self, records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        for record in records {
            self.insert(record);
        }
        self
    }

    pub fn insert(&self, record: CatalogRecord) {
        lock(&self.records).insert(record.object_id.clone(), record);
    }

    /// Make every subsequent `get` fail with `error`.
    pub fn fail_with(&self, error: GatewayError) {
        *lock(&self.failure) = Some(error);
    }

    /// Object ids looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl ICatalogGateway for FakeCatalog {
    fn get(&self, object_id: &str) -> GatewayResult<CatalogLookup> {
        lock(&self.calls).push(object_id.to_string());
        if let Some(err) = lock(&self.failure).clone() {
            return Err(err);
        }
        Ok(lock(&self.records).get(object_id).cloned().into())
    }
}

/// Remediation double recording every `(arn, tags)` it is asked to apply.
#[derive(Debug, Default)]
pub struct FakeRemediator {
    failure: Mutex<Option<GatewayError>>,
    applied: Mutex<Vec<(String, TagSet)>>,
}

impl FakeRemediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: GatewayError) -> Self {
        let fake = Self::default();
        fake.fail_with(error);
        fake
    }

    pub fn fail_with(&self, error: GatewayError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn applied(&self) -> Vec<(String, TagSet)> {
        lock(&self.applied).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.applied).len()
    }
}

impl IRemediationGateway for FakeRemediator {
    fn apply(&self, resource_arn: &str, tags: &TagSet) -> GatewayResult<()> {
        lock(&self.applied).push((resource_arn.to_string(), tags.clone()));
        match lock(&self.failure).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Reporter double recording every `(evaluation, correlation_token)`.
#[derive(Debug, Default)]
pub struct FakeReporter {
    failure: Mutex<Option<GatewayError>>,
    reports: Mutex<Vec<(Evaluation, String)>>,
}

impl FakeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: GatewayError) -> Self {
        let fake = Self::default();
        fake.fail_with(error);
        fake
    }

    pub fn fail_with(&self, error: GatewayError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn reports(&self) -> Vec<(Evaluation, String)> {
        lock(&self.reports).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.reports).len()
    }

    /// The single recorded evaluation.
    ///
    /// # Panics
    /// Panics unless exactly one report was received.
    pub fn only_report(&self) -> Evaluation {
        let reports = lock(&self.reports);
        assert_eq!(reports.len(), 1, "expected exactly one report, got {reports:?}");
        reports[0].0.clone()
    }
}

impl IEvaluationReporter for FakeReporter {
    fn report(&self, evaluation: &Evaluation, correlation_token: &str) -> GatewayResult<()> {
        lock(&self.reports).push((evaluation.clone(), correlation_token.to_string()));
        match lock(&self.failure).clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
