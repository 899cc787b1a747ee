//! Structured facts already known about the user, supplied by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extractor::FieldPresenceMap;
use crate::domain::foundation::FieldKey;

/// Previously collected facts keyed by field name (`"brand"`, `"petAge"`).
///
/// A fact satisfies a field when it carries a value: `null`, blank strings,
/// and empty arrays or objects do not count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownFacts(BTreeMap<String, Value>);

impl KnownFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fact, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the fact for `key` carries a value.
    pub fn has_value(&self, key: FieldKey) -> bool {
        self.0.get(key.as_str()).is_some_and(is_meaningful)
    }

    /// Fills in facts found in the conversation without overwriting facts
    /// that already carry a value.
    pub fn merge_extracted(&mut self, extracted: &FieldPresenceMap) {
        for (key, presence) in extracted.iter() {
            let Some(value) = presence.value.as_ref() else {
                continue;
            };
            if !self.has_value(key) {
                self.0
                    .insert(key.as_str().to_string(), Value::String(value.clone()));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every fact. Used when the user starts over.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for KnownFacts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
