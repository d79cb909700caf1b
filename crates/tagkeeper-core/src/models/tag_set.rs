use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::OBJECT_ID_TAG;

/// Tag key → tag value mapping attached to a resource or a catalog record.
///
/// Keys are unique and order carries no meaning. Backed by a `BTreeMap` so
/// serialized and logged forms are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a tag, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or `""` when the key is absent.
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// The catalog object id carried by this tag set (`""` when absent).
    pub fn object_id(&self) -> &str {
        self.value_or_empty(OBJECT_ID_TAG)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for TagSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for TagSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl IntoIterator for TagSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TagSet;

    #[test]
    fn absent_keys_read_as_empty() {
        let tags = TagSet::new().with("Environment", "prod");
        assert_eq!(tags.value_or_empty("Environment"), "prod");
        assert_eq!(tags.value_or_empty("Department"), "");
        assert_eq!(tags.object_id(), "");
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut tags = TagSet::new().with("Department", "sales");
        let previous = tags.insert("Department", "eng");
        assert_eq!(previous.as_deref(), Some("sales"));
        assert_eq!(tags.get("Department"), Some("eng"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let tags: TagSet = [("ObjectId", "X"), ("Environment", "prod")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"Environment":"prod","ObjectId":"X"}"#);
    }
}
