//! Evaluation outcome counters.
//!
//! [`EvaluationStats`] is shared across concurrent evaluations, so every
//! counter is atomic and the per-resource-type breakdown lives in a `DashMap`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// How a single evaluation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Conformant,
    Unresolved,
    LookupFailed,
    RemediationFailed,
    ReportingFailed,
}

/// Thread-safe counters over all evaluations seen by one orchestrator.
#[derive(Debug, Default)]
pub struct EvaluationStats {
    conformant: AtomicU64,
    unresolved: AtomicU64,
    lookup_failed: AtomicU64,
    remediation_failed: AtomicU64,
    reporting_failed: AtomicU64,
    remediations_attempted: AtomicU64,
    by_resource_type: DashMap<String, u64>,
}

impl EvaluationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the end of one evaluation.
    pub fn record(&self, resource_type: &str, outcome: EvaluationOutcome) {
        let counter = match outcome {
            EvaluationOutcome::Conformant => &self.conformant,
            EvaluationOutcome::Unresolved => &self.unresolved,
            EvaluationOutcome::LookupFailed => &self.lookup_failed,
            EvaluationOutcome::RemediationFailed => &self.remediation_failed,
            EvaluationOutcome::ReportingFailed => &self.reporting_failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        *self
            .by_resource_type
            .entry(resource_type.to_string())
            .or_insert(0) += 1;
    }

    pub fn record_remediation_attempt(&self) {
        self.remediations_attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        let conformant = self.conformant.load(Ordering::Relaxed);
        let unresolved = self.unresolved.load(Ordering::Relaxed);
        let lookup_failed = self.lookup_failed.load(Ordering::Relaxed);
        let remediation_failed = self.remediation_failed.load(Ordering::Relaxed);
        let reporting_failed = self.reporting_failed.load(Ordering::Relaxed);
        StatsSnapshot {
            total: conformant + unresolved + lookup_failed + remediation_failed + reporting_failed,
            conformant,
            unresolved,
            lookup_failed,
            remediation_failed,
            reporting_failed,
            remediations_attempted: self.remediations_attempted.load(Ordering::Relaxed),
            by_resource_type: self
                .by_resource_type
                .iter()
                .map(|e| (e.key().clone(), *e.value()))
                .collect(),
        }
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [
            &self.conformant,
            &self.unresolved,
            &self.lookup_failed,
            &self.remediation_failed,
            &self.reporting_failed,
            &self.remediations_attempted,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        self.by_resource_type.clear();
    }
}

/// Serializable view of [`EvaluationStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub conformant: u64,
    pub unresolved: u64,
    pub lookup_failed: u64,
    pub remediation_failed: u64,
    pub reporting_failed: u64,
    pub remediations_attempted: u64,
    pub by_resource_type: BTreeMap<String, u64>,
}

impl StatsSnapshot {
    /// Fraction of evaluations that ended in an error (0.0 when none ran).
    pub fn failure_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let failed = self.lookup_failed + self.remediation_failed + self.reporting_failed;
        failed as f64 / self.total as f64
    }
}
