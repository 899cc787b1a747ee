//! In-Memory Plan Catalog Adapter
//!
//! Holds plans in memory, keyed by category.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::context::KnownFacts;
use crate::domain::foundation::Category;
use crate::ports::{CatalogError, PlanCandidate, PlanCatalog};

/// In-memory plan catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanCatalog {
    plans: Arc<RwLock<HashMap<Category, Vec<PlanCandidate>>>>,
    unavailable: Arc<AtomicBool>,
    queries: Arc<AtomicUsize>,
}

impl InMemoryPlanCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-loaded with plans
    pub async fn with_plans(plans: impl IntoIterator<Item = PlanCandidate>) -> Self {
        let catalog = Self::new();
        for plan in plans {
            catalog.add_plan(plan).await;
        }
        catalog
    }

    /// Add a plan under its own category
    pub async fn add_plan(&self, plan: PlanCandidate) {
        self.plans
            .write()
            .await
            .entry(plan.category)
            .or_default()
            .push(plan);
    }

    /// Make subsequent queries fail (useful for tests)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `find_plans` calls received so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Total number of stored plans
    pub async fn plan_count(&self) -> usize {
        self.plans.read().await.values().map(Vec::len).sum()
    }

    /// Clear all stored plans (useful for tests)
    pub async fn clear(&self) {
        self.plans.write().await.clear();
    }
}

#[async_trait]
impl PlanCatalog for InMemoryPlanCatalog {
    async fn find_plans(
        &self,
        category: Category,
        facts: &KnownFacts,
    ) -> Result<Vec<PlanCandidate>, CatalogError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CatalogError::Unavailable("in-memory catalog disabled".to_string()));
        }

        let plans = self.plans.read().await;
        Ok(plans
            .get(&category)
            .map(|plans| {
                plans
                    .iter()
                    .filter(|plan| plan.is_eligible(facts))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog_plan() -> PlanCandidate {
        PlanCandidate::new("pet-dog", "Huellitas", Category::Pet).requiring("species", "dog")
    }

    fn cat_plan() -> PlanCandidate {
        PlanCandidate::new("pet-cat", "Michis", Category::Pet).requiring("species", "cat")
    }

    #[tokio::test]
    async fn returns_plans_for_category_only() {
        let catalog = InMemoryPlanCatalog::with_plans([
            dog_plan(),
            PlanCandidate::new("travel-1", "Mundo", Category::Travel),
        ])
        .await;

        let plans = catalog.find_plans(Category::Travel, &KnownFacts::new()).await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "travel-1");

        let none = catalog.find_plans(Category::Health, &KnownFacts::new()).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn filters_by_eligibility() {
        let catalog = InMemoryPlanCatalog::with_plans([dog_plan(), cat_plan()]).await;
        let facts = KnownFacts::new().with("species", "cat");

        let plans = catalog.find_plans(Category::Pet, &facts).await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "pet-cat");
    }

    #[tokio::test]
    async fn unavailable_catalog_errors_and_counts_queries() {
        let catalog = InMemoryPlanCatalog::with_plans([dog_plan()]).await;
        catalog.set_unavailable(true);

        let result = catalog.find_plans(Category::Pet, &KnownFacts::new()).await;
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
        assert_eq!(catalog.query_count(), 1);

        catalog.set_unavailable(false);
        assert!(catalog.find_plans(Category::Pet, &KnownFacts::new()).await.is_ok());
        assert_eq!(catalog.query_count(), 2);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let catalog = InMemoryPlanCatalog::new();
        let clone = catalog.clone();
        clone.add_plan(dog_plan()).await;
        assert_eq!(catalog.plan_count().await, 1);

        catalog.clear().await;
        assert_eq!(clone.plan_count().await, 0);
    }
}
