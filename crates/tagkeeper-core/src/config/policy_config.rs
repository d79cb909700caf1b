use serde::{Deserialize, Serialize};

use super::defaults;

/// Which tags are mandatory and how verdicts are annotated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub required_keys: Vec<String>,
    pub compliant_annotation: String,
    pub non_compliant_annotation: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            required_keys: defaults::default_required_keys(),
            compliant_annotation: defaults::DEFAULT_COMPLIANT_ANNOTATION.to_string(),
            non_compliant_annotation: defaults::DEFAULT_NON_COMPLIANT_ANNOTATION.to_string(),
        }
    }
}
