//! Plan Catalog Port - Interface for looking up recommendable plans.
//!
//! The catalog is an external collaborator. It is only consulted once the
//! conversation carries every required fact for its category.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::context::KnownFacts;
use crate::domain::foundation::Category;

/// Errors that can occur during catalog lookups
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Plan catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Plan query failed for {category}: {reason}")]
    QueryFailed { category: Category, reason: String },
}

/// A candidate recommendation record as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCandidate {
    pub id: String,
    pub name: String,
    pub category: Category,

    /// Facts a conversation must match for this plan to apply, keyed like
    /// [`KnownFacts`]. String values compare case-insensitively.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub eligibility: BTreeMap<String, serde_json::Value>,

    /// Opaque provider data passed through to the caller.
    #[serde(default)]
    pub details: serde_json::Value,
}

impl PlanCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            eligibility: BTreeMap::new(),
            details: serde_json::Value::Null,
        }
    }

    /// Adds an eligibility criterion.
    pub fn requiring(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.eligibility.insert(key.into(), value.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Returns true if every criterion is matched by `facts`. A criterion
    /// whose fact is unknown does not exclude the plan.
    pub fn is_eligible(&self, facts: &KnownFacts) -> bool {
        self.eligibility
            .iter()
            .all(|(key, expected)| match facts.get(key) {
                None | Some(serde_json::Value::Null) => true,
                Some(actual) => values_match(expected, actual),
            })
    }
}

fn values_match(expected: &serde_json::Value, actual: &serde_json::Value) -> bool {
    match (expected, actual) {
        (serde_json::Value::String(a), serde_json::Value::String(b)) => {
            a.trim().eq_ignore_ascii_case(b.trim())
        }
        _ => expected == actual,
    }
}

/// Port for fetching candidate plans
#[async_trait]
pub trait PlanCatalog: Send + Sync {
    /// Find plans for a category given what is known about the user
    ///
    /// # Errors
    /// Returns `CatalogError` if the catalog cannot be queried
    async fn find_plans(
        &self,
        category: Category,
        facts: &KnownFacts,
    ) -> Result<Vec<PlanCandidate>, CatalogError>;
}
