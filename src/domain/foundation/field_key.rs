//! FieldKey enum naming every canonical fact the engine can extract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured fact that may be required before recommendations are shown.
///
/// Keys serialize in camelCase (`petAge`) so the same names can be used as
/// keys in caller-supplied known facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    // Travel
    Destination,
    Origin,
    Duration,
    Travelers,
    Purpose,
    // Auto
    Brand,
    Year,
    Country,
    // Pet
    Species,
    PetAge,
    Breed,
    // Health
    Age,
    Gender,
    Location,
}

impl FieldKey {
    /// Returns the key as it appears in results and known facts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Destination => "destination",
            FieldKey::Origin => "origin",
            FieldKey::Duration => "duration",
            FieldKey::Travelers => "travelers",
            FieldKey::Purpose => "purpose",
            FieldKey::Brand => "brand",
            FieldKey::Year => "year",
            FieldKey::Country => "country",
            FieldKey::Species => "species",
            FieldKey::PetAge => "petAge",
            FieldKey::Breed => "breed",
            FieldKey::Age => "age",
            FieldKey::Gender => "gender",
            FieldKey::Location => "location",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for FieldKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
