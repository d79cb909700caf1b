//! Tag matching: completeness of one tag set, agreement between two.
//!
//! Absent keys read as the empty string, so a missing key never satisfies a
//! completeness check and only matches another missing or empty value.

use tagkeeper_core::config::PolicyConfig;
use tagkeeper_core::constants::REQUIRED_TAGS;
use tagkeeper_core::errors::{ConfigError, TagKeeperResult};
use tagkeeper_core::models::TagSet;

/// True iff every mandatory tag is present with a non-empty value.
pub fn is_well_formed(tags: &TagSet) -> bool {
    well_formed_over(REQUIRED_TAGS, tags)
}

/// True iff the mandatory tags carry identical values in both sets.
/// Other keys are ignored.
pub fn matches(observed: &TagSet, catalog: &TagSet) -> bool {
    matches_over(REQUIRED_TAGS, observed, catalog)
}

fn well_formed_over<'a>(keys: impl IntoIterator<Item = &'a str>, tags: &TagSet) -> bool {
    keys.into_iter().all(|k| !tags.value_or_empty(k).is_empty())
}

fn matches_over<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    observed: &TagSet,
    catalog: &TagSet,
) -> bool {
    keys.into_iter()
        .all(|k| observed.value_or_empty(k) == catalog.value_or_empty(k))
}

/// The set of mandatory tag keys, with the checks expressed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPolicy {
    required_keys: Vec<String>,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            required_keys: REQUIRED_TAGS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl TagPolicy {
    /// Build a policy over `required_keys`.
    ///
    /// An empty list would make every tag set pass both checks, so it is
    /// rejected, as are blank keys.
    pub fn new<I, S>(required_keys: I) -> TagKeeperResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required_keys: Vec<String> = required_keys.into_iter().map(Into::into).collect();
        if required_keys.is_empty() {
            return Err(invalid_keys("must name at least one key"));
        }
        if let Some(blank) = required_keys.iter().position(|k| k.trim().is_empty()) {
            return Err(invalid_keys(&format!("entry {blank} is blank")));
        }
        Ok(Self { required_keys })
    }

    pub fn from_config(config: &PolicyConfig) -> TagKeeperResult<Self> {
        Self::new(config.required_keys.iter().cloned())
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.required_keys.iter().map(String::as_str)
    }

    pub fn is_well_formed(&self, tags: &TagSet) -> bool {
        well_formed_over(self.keys(), tags)
    }

    pub fn matches(&self, observed: &TagSet, catalog: &TagSet) -> bool {
        matches_over(self.keys(), observed, catalog)
    }

    /// Mandatory keys that are absent or empty in `tags`.
    pub fn missing_keys<'p>(&'p self, tags: &TagSet) -> Vec<&'p str> {
        self.keys()
            .filter(|k| tags.value_or_empty(k).is_empty())
            .collect()
    }

    /// Mandatory keys whose values differ between the two sets.
    pub fn mismatched_keys<'p>(&'p self, observed: &TagSet, catalog: &TagSet) -> Vec<&'p str> {
        self.keys()
            .filter(|k| observed.value_or_empty(k) != catalog.value_or_empty(k))
            .collect()
    }
}

fn invalid_keys(reason: &str) -> tagkeeper_core::errors::TagKeeperError {
    ConfigError::Invalid {
        field: "policy.required_keys".to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TagSet {
        TagSet::new()
            .with("Environment", "prod")
            .with("Department", "eng")
            .with("ObjectId", "X")
    }

    #[test]
    fn complete_set_is_well_formed() {
        assert!(is_well_formed(&complete()));
    }

    #[test]
    fn empty_value_is_not_well_formed() {
        let tags = complete().with("ObjectId", "");
        assert!(!is_well_formed(&tags));
    }

    #[test]
    fn extra_keys_do_not_affect_matching() {
        let observed = complete().with("Owner", "alice");
        let catalog = complete().with("Owner", "bob");
        assert!(matches(&observed, &catalog));
    }

    #[test]
    fn both_absent_keys_match() {
        assert!(matches(&TagSet::new(), &TagSet::new()));
        assert!(!is_well_formed(&TagSet::new()));
    }

    #[test]
    fn custom_policy_reports_missing_and_mismatched_keys() {
        let policy = TagPolicy::new(["Environment", "CostCenter"]).unwrap();
        let observed = complete();
        let catalog = complete().with("CostCenter", "cc-1");
        assert_eq!(policy.missing_keys(&observed), vec!["CostCenter"]);
        assert_eq!(policy.mismatched_keys(&observed, &catalog), vec!["CostCenter"]);
        assert!(policy.is_well_formed(&catalog));
    }

    #[test]
    fn empty_policy_is_rejected() {
        let err = TagPolicy::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(
            err,
            tagkeeper_core::errors::TagKeeperError::ConfigError(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(TagPolicy::new(["Environment", "  "]).is_err());
    }

    #[test]
    fn default_policy_uses_mandatory_tags() {
        assert_eq!(
            TagPolicy::default().required_keys(),
            &["Environment", "Department", "ObjectId"]
        );
    }
}
