//! Category enum representing the product domains a conversation can be about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The insurance product domain a conversation is about.
///
/// `General` is the fallback when no domain vocabulary is present; it is the
/// only category with no required fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Travel,
    Auto,
    Pet,
    Health,
    #[default]
    General,
}

impl Category {
    /// Returns every category, `General` last.
    pub fn all() -> &'static [Category] {
        &[
            Category::Travel,
            Category::Auto,
            Category::Pet,
            Category::Health,
            Category::General,
        ]
    }

    /// Returns the non-general categories in classification priority order.
    ///
    /// When text carries vocabulary from several domains, the earliest
    /// category in this list wins.
    pub fn priority_order() -> &'static [Category] {
        &[
            Category::Auto,
            Category::Travel,
            Category::Pet,
            Category::Health,
        ]
    }

    /// Returns the 0-based classification priority, or `None` for `General`.
    pub fn priority(&self) -> Option<usize> {
        Self::priority_order().iter().position(|c| c == self)
    }

    /// Returns true for the fallback category.
    pub fn is_general(&self) -> bool {
        matches!(self, Category::General)
    }

    /// Returns the wire name used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Travel => "travel",
            Category::Auto => "auto",
            Category::Pet => "pet",
            Category::Health => "health",
            Category::General => "general",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Auto => "Auto",
            Category::Pet => "Pet",
            Category::Health => "Health",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
