use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChangeNotification, ComplianceType, Verdict};

/// Verdict addressed to a specific resource, as handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub resource_id: String,
    pub resource_type: String,
    pub compliance: ComplianceType,
    pub annotation: String,
    /// Lets the receiver order out-of-sequence reports.
    pub ordering_timestamp: DateTime<Utc>,
}

impl Evaluation {
    /// Address `verdict` to the notification's resource, stamped with its `occurred_at`.
    pub fn for_notification(notification: &ChangeNotification, verdict: &Verdict) -> Self {
        Self {
            resource_id: notification.resource_id.clone(),
            resource_type: notification.resource_type.clone(),
            compliance: verdict.compliance,
            annotation: verdict.annotation.clone(),
            ordering_timestamp: notification.occurred_at,
        }
    }
}
