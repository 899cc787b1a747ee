//! Ports: interfaces to collaborators outside the domain.

mod plan_catalog;

pub use plan_catalog::{CatalogError, PlanCandidate, PlanCatalog};
