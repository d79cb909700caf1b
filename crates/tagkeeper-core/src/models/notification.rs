use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TagSet;

/// A single configuration-change notification for one resource.
///
/// Arrives already deserialized; one per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    pub resource_id: String,
    pub resource_type: String,
    pub resource_arn: String,
    #[serde(default)]
    pub observed_tags: TagSet,
    /// Opaque token tying the verdict back to the triggering rule evaluation.
    pub correlation_token: String,
    /// Doubles as the ordering timestamp of every report for this notification.
    pub occurred_at: DateTime<Utc>,
}

impl ChangeNotification {
    /// Object id used for the catalog lookup (`""` when the tag is absent).
    pub fn object_id(&self) -> &str {
        self.observed_tags.object_id()
    }
}
