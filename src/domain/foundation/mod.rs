//! Foundation module - shared domain primitives.
//!
//! Closed enumerations used by every layer: the product [`Category`] a
//! conversation is about and the [`FieldKey`]s that can be extracted for it.

mod category;
mod field_key;

pub use category::{Category, UnknownCategory};
pub use field_key::FieldKey;
