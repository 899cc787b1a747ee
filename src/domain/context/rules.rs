//! Declarative rule table: per-category trigger vocabulary, canonical field
//! order, clarifying questions, and the extractor bound to each field.
//!
//! Category priority, required-field order, and question text are data.
//! Adding a category means adding a [`CategoryRules`] entry here.

use serde::Serialize;

use super::extractor::{self, ExtractionLimits};
use super::lexicon;
use super::text::ScannedText;
use crate::domain::foundation::{Category, FieldKey};

/// Whether a field blocks recommendations when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Necessity {
    /// Must be known before recommendations are shown.
    Required,
    /// Extracted when stated, asked about only when configured to.
    Optional,
}

/// A canonical fact and the question that asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRequirement {
    pub key: FieldKey,
    pub question: &'static str,
    pub necessity: Necessity,
}

impl FieldRequirement {
    pub const fn required(key: FieldKey, question: &'static str) -> Self {
        Self {
            key,
            question,
            necessity: Necessity::Required,
        }
    }

    pub const fn optional(key: FieldKey, question: &'static str) -> Self {
        Self {
            key,
            question,
            necessity: Necessity::Optional,
        }
    }

    pub fn is_required(&self) -> bool {
        self.necessity == Necessity::Required
    }
}

/// Locates a specific value for one field. Returns `None` when only vague
/// or no information is present.
pub type ExtractFn = fn(&ScannedText, &ExtractionLimits) -> Option<String>;

/// A field requirement bound to its extractor.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub requirement: FieldRequirement,
    pub extract: ExtractFn,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

/// Everything the engine knows about one category.
#[derive(Debug)]
pub struct CategoryRules {
    pub category: Category,
    /// Trigger vocabulary, in folded form.
    pub keywords: &'static [&'static [&'static str]],
    /// Fields in canonical order.
    pub fields: &'static [FieldRule],
}

impl CategoryRules {
    /// Field requirements in canonical order.
    pub fn requirements(&self) -> impl Iterator<Item = &FieldRequirement> + '_ {
        self.fields.iter().map(|f| &f.requirement)
    }
}

const TRAVEL_FIELDS: &[FieldRule] = &[
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Destination,
            "¿A qué país o ciudad vas a viajar?",
        ),
        extract: extractor::destination,
    },
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Origin,
            "¿Desde qué ciudad o país sales?",
        ),
        extract: extractor::origin,
    },
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Duration,
            "¿Cuántos días durará tu viaje?",
        ),
        extract: extractor::duration,
    },
    FieldRule {
        requirement: FieldRequirement::optional(
            FieldKey::Travelers,
            "¿Cuántas personas viajan?",
        ),
        extract: extractor::travelers,
    },
    FieldRule {
        requirement: FieldRequirement::optional(
            FieldKey::Purpose,
            "¿Cuál es el motivo del viaje: turismo, negocios o estudios?",
        ),
        extract: extractor::purpose,
    },
];

const AUTO_FIELDS: &[FieldRule] = &[
    FieldRule {
        requirement: FieldRequirement::required(FieldKey::Brand, "¿Qué marca es tu vehículo?"),
        extract: extractor::brand,
    },
    FieldRule {
        requirement: FieldRequirement::required(FieldKey::Year, "¿De qué año es tu vehículo?"),
        extract: extractor::vehicle_year,
    },
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Country,
            "¿En qué país circula tu vehículo?",
        ),
        extract: extractor::place,
    },
];

const PET_FIELDS: &[FieldRule] = &[
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Species,
            "¿Tu mascota es perro o gato?",
        ),
        extract: extractor::species,
    },
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::PetAge,
            "¿Cuántos años o meses tiene tu mascota?",
        ),
        extract: extractor::pet_age,
    },
    FieldRule {
        requirement: FieldRequirement::optional(FieldKey::Breed, "¿De qué raza es tu mascota?"),
        extract: extractor::breed,
    },
];

const HEALTH_FIELDS: &[FieldRule] = &[
    FieldRule {
        requirement: FieldRequirement::required(FieldKey::Age, "¿Qué edad tienes?"),
        extract: extractor::person_age,
    },
    FieldRule {
        requirement: FieldRequirement::required(FieldKey::Gender, "¿Cuál es tu sexo?"),
        extract: extractor::gender,
    },
    FieldRule {
        requirement: FieldRequirement::required(
            FieldKey::Location,
            "¿En qué país o ciudad vives?",
        ),
        extract: extractor::place,
    },
];

/// All non-general categories, in classification priority order.
pub static RULEBOOK: &[CategoryRules] = &[
    CategoryRules {
        category: Category::Auto,
        keywords: &[lexicon::AUTO_KEYWORDS, lexicon::VEHICLE_BRANDS],
        fields: AUTO_FIELDS,
    },
    CategoryRules {
        category: Category::Travel,
        keywords: &[lexicon::TRAVEL_KEYWORDS],
        fields: TRAVEL_FIELDS,
    },
    CategoryRules {
        category: Category::Pet,
        keywords: &[
            lexicon::PET_KEYWORDS,
            lexicon::DOG_WORDS,
            lexicon::CAT_WORDS,
            lexicon::DOG_BREEDS,
            lexicon::CAT_BREEDS,
        ],
        fields: PET_FIELDS,
    },
    CategoryRules {
        category: Category::Health,
        keywords: &[lexicon::HEALTH_KEYWORDS],
        fields: HEALTH_FIELDS,
    },
];

/// Returns the rules for a category. `General` has none.
pub fn rules_for(category: Category) -> Option<&'static CategoryRules> {
    RULEBOOK.iter().find(|r| r.category == category)
}

/// Returns the field requirements for a category in canonical order.
pub fn requirements_for(category: Category) -> Vec<FieldRequirement> {
    rules_for(category)
        .map(|rules| rules.requirements().copied().collect())
        .unwrap_or_default()
}

/// Returns the canonical question for a field, if any category defines it.
pub fn question_for(key: FieldKey) -> Option<&'static str> {
    RULEBOOK
        .iter()
        .flat_map(|r| r.fields.iter())
        .find(|f| f.requirement.key == key)
        .map(|f| f.requirement.question)
}
