//! Adapters: implementations of the ports.

pub mod catalog;

pub use catalog::InMemoryPlanCatalog;
