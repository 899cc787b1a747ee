//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (categories, field keys)
//! - `context` - Classification, extraction, sufficiency and the recommendation gate

pub mod context;
pub mod foundation;
