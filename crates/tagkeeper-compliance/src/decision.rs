//! The decision table applied once a catalog record is in hand.

use std::fmt;

use tagkeeper_core::models::TagSet;

use crate::matcher::TagPolicy;

/// Whether the observed tags can stand or must be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Compliant,
    Remediate(RemediationReason),
}

/// Why remediation was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemediationReason {
    /// Observed tags lack mandatory keys or carry empty values.
    Incomplete { missing: Vec<String> },
    /// Observed tags are complete but disagree with the catalog.
    Mismatch { keys: Vec<String> },
}

impl fmt::Display for RemediationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { missing } => write!(f, "missing tags: {}", missing.join(", ")),
            Self::Mismatch { keys } => write!(f, "tags differ from catalog: {}", keys.join(", ")),
        }
    }
}

/// Completeness is checked before agreement.
pub fn decide(policy: &TagPolicy, observed: &TagSet, catalog: &TagSet) -> Decision {
    if !policy.is_well_formed(observed) {
        return Decision::Remediate(RemediationReason::Incomplete {
            missing: to_owned(policy.missing_keys(observed)),
        });
    }
    if !policy.matches(observed, catalog) {
        return Decision::Remediate(RemediationReason::Mismatch {
            keys: to_owned(policy.mismatched_keys(observed, catalog)),
        });
    }
    Decision::Compliant
}

fn to_owned(keys: Vec<&str>) -> Vec<String> {
    keys.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(env: &str, dept: &str, id: &str) -> TagSet {
        TagSet::new()
            .with("Environment", env)
            .with("Department", dept)
            .with("ObjectId", id)
    }

    #[test]
    fn incomplete_wins_over_mismatch() {
        let decision = decide(&TagPolicy::default(), &tags("prod", "", "X"), &tags("dev", "eng", "X"));
        assert_eq!(
            decision,
            Decision::Remediate(RemediationReason::Incomplete {
                missing: vec!["Department".into()]
            })
        );
    }

    #[test]
    fn mismatch_lists_differing_keys() {
        let decision = decide(
            &TagPolicy::default(),
            &tags("prod", "sales", "X"),
            &tags("prod", "eng", "X"),
        );
        match decision {
            Decision::Remediate(reason @ RemediationReason::Mismatch { .. }) => {
                assert_eq!(reason.to_string(), "tags differ from catalog: Department");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn identical_tags_are_compliant() {
        let t = tags("prod", "eng", "X");
        assert_eq!(decide(&TagPolicy::default(), &t, &t), Decision::Compliant);
    }
}
