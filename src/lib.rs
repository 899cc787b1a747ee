//! Coverage Context - Conversational context sufficiency for insurance plans
//!
//! This crate decides, for a free-text insurance conversation, which product
//! category it concerns, which required facts are already stated, and which
//! clarifying questions must be asked before plans may be recommended.
//!
//! # Example
//!
//! ```
//! use coverage_context::{analyze_context_needs, can_show_plans, classify, Category};
//!
//! let text = "Quiero un seguro de viaje";
//! let category = classify(text);
//! assert_eq!(category, Category::Travel);
//!
//! let result = analyze_context_needs(text, category, None);
//! assert!(result.needs_more_context());
//! assert!(!can_show_plans(&result, &["plan-a"]));
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::context::{
    default_engine, ContextAnalysisResult, ContextEngine, ConversationText, ConversationTurn,
    FieldPresenceMap, KnownFacts, Role,
};
pub use domain::foundation::{Category, FieldKey};

/// Classifies text into a category using the default engine.
pub fn classify(text: &str) -> Category {
    default_engine().classify(text)
}

/// Extracts the canonical fields of `category` using the default engine.
pub fn extract_fields(text: &str, category: Category) -> FieldPresenceMap {
    default_engine().extract_fields(text, category)
}

/// Reports missing required facts and their clarifying questions.
pub fn analyze_context_needs(
    text: &str,
    category: Category,
    known: Option<&KnownFacts>,
) -> ContextAnalysisResult {
    default_engine().analyze_context_needs(text, category, known)
}

/// Returns true if no required fact is missing.
pub fn has_sufficient_context(text: &str, category: Category) -> bool {
    default_engine().has_sufficient_context(text, category)
}

/// Returns true iff context is sufficient and there is at least one candidate.
pub fn can_show_plans<T>(result: &ContextAnalysisResult, candidates: &[T]) -> bool {
    default_engine().can_show_plans(result, candidates)
}
