//! ComplianceEngine: drives catalog lookup, tag matching, remediation and
//! verdict reporting for one change notification at a time.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn, Level};
use uuid::Uuid;

use tagkeeper_core::config::PolicyConfig;
use tagkeeper_core::errors::{TagKeeperError, TagKeeperResult};
use tagkeeper_core::models::{
    CatalogLookup, CatalogRecord, ChangeNotification, Evaluation, InvocationStatus, Verdict,
};
use tagkeeper_core::traits::{ICatalogGateway, IEvaluationReporter, IRemediationGateway};
use tagkeeper_observability::metrics::{EvaluationOutcome, EvaluationStats};
use tagkeeper_observability::{evaluation_span, lookup_span, remediation_span, reporting_span};

use crate::decision::{decide, Decision, RemediationReason};
use crate::matcher::TagPolicy;
use crate::phase::{EvaluationPhase, PhaseTrace};

/// The compliance evaluation engine.
///
/// Holds only read-only handles to its gateways, so a single engine can be
/// shared across threads and evaluate unrelated notifications concurrently.
/// Every gateway is called at most once per evaluation; retries belong to
/// whoever invokes the engine.
pub struct ComplianceEngine {
    catalog: Arc<dyn ICatalogGateway>,
    remediation: Arc<dyn IRemediationGateway>,
    reporter: Arc<dyn IEvaluationReporter>,
    policy: TagPolicy,
    compliant_annotation: String,
    non_compliant_annotation: String,
    stats: Option<Arc<EvaluationStats>>,
}

impl ComplianceEngine {
    pub fn new(
        catalog: Arc<dyn ICatalogGateway>,
        remediation: Arc<dyn IRemediationGateway>,
        reporter: Arc<dyn IEvaluationReporter>,
    ) -> Self {
        let defaults = PolicyConfig::default();
        Self {
            catalog,
            remediation,
            reporter,
            policy: TagPolicy::default(),
            compliant_annotation: defaults.compliant_annotation,
            non_compliant_annotation: defaults.non_compliant_annotation,
            stats: None,
        }
    }

    /// Use the mandatory keys and annotations from `config`.
    pub fn with_policy_config(mut self, config: &PolicyConfig) -> TagKeeperResult<Self> {
        self.policy = TagPolicy::from_config(config)?;
        self.compliant_annotation = config.compliant_annotation.clone();
        self.non_compliant_annotation = config.non_compliant_annotation.clone();
        Ok(self)
    }

    /// Record every outcome into `stats`.
    pub fn with_stats(mut self, stats: Arc<EvaluationStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn policy(&self) -> &TagPolicy {
        &self.policy
    }

    pub fn stats(&self) -> Option<&EvaluationStats> {
        self.stats.as_deref()
    }

    /// Evaluate one notification.
    ///
    /// Returns `Conformant` when a COMPLIANT verdict was reported and
    /// `Unresolved` when the catalog had no record (NON_COMPLIANT reported).
    /// Lookup, remediation, and reporting failures are returned as errors.
    pub fn evaluate(&self, notification: &ChangeNotification) -> TagKeeperResult<InvocationStatus> {
        self.evaluate_traced(notification).0
    }

    /// Like [`evaluate`](Self::evaluate), also returning the phases visited.
    pub fn evaluate_traced(
        &self,
        notification: &ChangeNotification,
    ) -> (TagKeeperResult<InvocationStatus>, PhaseTrace) {
        let invocation_id = Uuid::new_v4();
        let span = evaluation_span!(invocation_id, notification.resource_id);
        let _guard = span.enter();

        if tracing::enabled!(Level::DEBUG) {
            match serde_json::to_string(notification) {
                Ok(json) => debug!(notification = %json, "evaluating change notification"),
                Err(e) => debug!(error = %e, "notification not serializable for logging"),
            }
        }

        let mut trace = PhaseTrace::new();
        let result = self.run(notification, &mut trace);
        trace.finish();

        if let Some(outcome) = outcome_of(&result) {
            if let Some(stats) = &self.stats {
                stats.record(&notification.resource_type, outcome);
            }
        }
        (result, trace)
    }

    /// Evaluate independent notifications in parallel. Results keep input order.
    pub fn evaluate_all(
        &self,
        notifications: &[ChangeNotification],
    ) -> Vec<TagKeeperResult<InvocationStatus>> {
        notifications
            .par_iter()
            .map(|notification| self.evaluate(notification))
            .collect()
    }

    fn run(
        &self,
        notification: &ChangeNotification,
        trace: &mut PhaseTrace,
    ) -> TagKeeperResult<InvocationStatus> {
        let object_id = notification.object_id();
        let lookup = {
            let _span = lookup_span!(object_id).entered();
            self.catalog.get(object_id)
        };

        let record = match lookup {
            Ok(CatalogLookup::Found(record)) => record,
            Ok(CatalogLookup::NotFound) => {
                info!(object_id, "no catalog record for object id");
                trace.advance(EvaluationPhase::Reporting);
                self.report(notification, &self.non_compliant())?;
                return Ok(InvocationStatus::Unresolved);
            }
            Err(source) => {
                warn!(object_id, error = %source, "catalog lookup failed");
                trace.advance(EvaluationPhase::Reporting);
                self.report(notification, &self.non_compliant())?;
                return Err(TagKeeperError::LookupFailed {
                    object_id: object_id.to_string(),
                    source,
                });
            }
        };

        trace.advance(EvaluationPhase::Evaluating);
        if let Decision::Remediate(reason) =
            decide(&self.policy, &notification.observed_tags, &record.tags)
        {
            trace.advance(EvaluationPhase::Remediating);
            self.remediate(notification, &record, &reason, trace)?;
        } else {
            debug!(object_id, "observed tags match catalog");
        }

        trace.advance(EvaluationPhase::Reporting);
        self.report(notification, &self.compliant())?;
        Ok(InvocationStatus::Conformant)
    }

    /// Apply the catalog tags. On failure, report NON_COMPLIANT best-effort
    /// and return the remediation error; a failure of that report is only logged.
    fn remediate(
        &self,
        notification: &ChangeNotification,
        record: &CatalogRecord,
        reason: &RemediationReason,
        trace: &mut PhaseTrace,
    ) -> TagKeeperResult<()> {
        let _span = remediation_span!(notification.resource_arn, record.tags.len()).entered();
        info!(%reason, "remediating resource tags");
        if let Some(stats) = &self.stats {
            stats.record_remediation_attempt();
        }

        let Err(source) = self
            .remediation
            .apply(&notification.resource_arn, &record.tags)
        else {
            info!("catalog tags applied");
            return Ok(());
        };

        warn!(error = %source, "remediation failed");
        trace.advance(EvaluationPhase::Reporting);
        if let Err(report_err) = self.report(notification, &self.non_compliant()) {
            warn!(error = %report_err, "best-effort non-compliant report failed");
        }
        Err(TagKeeperError::RemediationFailed {
            resource_arn: notification.resource_arn.clone(),
            source,
        })
    }

    fn report(&self, notification: &ChangeNotification, verdict: &Verdict) -> TagKeeperResult<()> {
        let _span = reporting_span!(verdict.compliance).entered();
        let evaluation = Evaluation::for_notification(notification, verdict);
        self.reporter
            .report(&evaluation, &notification.correlation_token)
            .map_err(|source| TagKeeperError::ReportingFailed {
                resource_id: notification.resource_id.clone(),
                source,
            })?;
        info!(
            compliance = %evaluation.compliance,
            annotation = %evaluation.annotation,
            "evaluation reported"
        );
        Ok(())
    }

    fn compliant(&self) -> Verdict {
        Verdict::compliant(self.compliant_annotation.as_str())
    }

    fn non_compliant(&self) -> Verdict {
        Verdict::non_compliant(self.non_compliant_annotation.as_str())
    }
}

fn outcome_of(result: &TagKeeperResult<InvocationStatus>) -> Option<EvaluationOutcome> {
    match result {
        Ok(InvocationStatus::Conformant) => Some(EvaluationOutcome::Conformant),
        Ok(InvocationStatus::Unresolved) => Some(EvaluationOutcome::Unresolved),
        Err(TagKeeperError::LookupFailed { .. }) => Some(EvaluationOutcome::LookupFailed),
        Err(TagKeeperError::RemediationFailed { .. }) => Some(EvaluationOutcome::RemediationFailed),
        Err(TagKeeperError::ReportingFailed { .. }) => Some(EvaluationOutcome::ReportingFailed),
        Err(_) => None,
    }
}
