//! Sufficiency evaluation: which required facts are still missing, and the
//! clarifying questions that ask for them.

use serde::Serialize;

use super::extractor::{EntityExtractor, FieldPresenceMap};
use super::facts::KnownFacts;
use super::rules::{self, FieldRequirement};
use super::text::ScannedText;
use crate::domain::foundation::{Category, FieldKey};

/// Outcome of checking a conversation for missing facts.
///
/// # Invariants
///
/// - `suggested_questions[i]` is the canonical question for `missing_info[i]`.
/// - Both lists follow the category's canonical field order.
/// - `needs_more_context` is true exactly when `missing_info` is non-empty.
/// - `General` never has missing fields.
///
/// Results only come from evaluating a conversation; callers cannot build
/// one that skips the check:
///
/// ```compile_fail
/// use coverage_context::{Category, ContextAnalysisResult};
///
/// let forged = ContextAnalysisResult::sufficient(Category::Travel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextAnalysisResult {
    category: Category,
    missing_info: Vec<FieldKey>,
    suggested_questions: Vec<String>,
    needs_more_context: bool,
}

impl ContextAnalysisResult {
    /// A result with nothing missing.
    pub(crate) fn sufficient(category: Category) -> Self {
        Self {
            category,
            missing_info: Vec::new(),
            suggested_questions: Vec::new(),
            needs_more_context: false,
        }
    }

    fn push_missing(&mut self, requirement: &FieldRequirement) {
        self.missing_info.push(requirement.key);
        self.suggested_questions
            .push(requirement.question.to_string());
        self.needs_more_context = true;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Missing field keys in canonical order.
    pub fn missing_info(&self) -> &[FieldKey] {
        &self.missing_info
    }

    /// Clarifying questions, parallel to [`missing_info`](Self::missing_info).
    pub fn suggested_questions(&self) -> &[String] {
        &self.suggested_questions
    }

    pub fn needs_more_context(&self) -> bool {
        self.needs_more_context
    }

    /// Returns true if `key` is still missing.
    pub fn is_missing(&self, key: FieldKey) -> bool {
        self.missing_info.contains(&key)
    }

    /// The question to ask next, if any.
    pub fn next_question(&self) -> Option<&str> {
        self.suggested_questions.first().map(String::as_str)
    }

    /// Missing keys paired with their questions.
    pub fn missing_with_questions(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.missing_info
            .iter()
            .copied()
            .zip(self.suggested_questions.iter().map(String::as_str))
    }
}

/// Decides whether enough is known to recommend plans.
#[derive(Debug, Clone)]
pub struct SufficiencyEvaluator {
    extractor: EntityExtractor,
    ask_optional_fields: bool,
}

impl SufficiencyEvaluator {
    /// Creates an evaluator. When `ask_optional_fields` is set, optional
    /// fields are reported as missing too.
    pub fn new(extractor: EntityExtractor, ask_optional_fields: bool) -> Self {
        Self {
            extractor,
            ask_optional_fields,
        }
    }

    pub fn extractor(&self) -> &EntityExtractor {
        &self.extractor
    }

    /// Analyzes raw text for `category`.
    pub fn analyze(
        &self,
        text: &str,
        category: Category,
        known: Option<&KnownFacts>,
    ) -> ContextAnalysisResult {
        let scanned = ScannedText::new(text);
        let extracted = self.extractor.extract_scanned(&scanned, category);
        self.evaluate(&extracted, known)
    }

    /// Evaluates an existing presence map. A field is satisfied when it was
    /// extracted or `known` already has a value for it.
    pub fn evaluate(
        &self,
        extracted: &FieldPresenceMap,
        known: Option<&KnownFacts>,
    ) -> ContextAnalysisResult {
        let category = extracted.category();
        let mut result = ContextAnalysisResult::sufficient(category);

        let Some(rules) = rules::rules_for(category) else {
            return result;
        };

        for requirement in rules.requirements() {
            if !requirement.is_required() && !self.ask_optional_fields {
                continue;
            }
            let satisfied = extracted.is_present(requirement.key)
                || known.is_some_and(|facts| facts.has_value(requirement.key));
            if !satisfied {
                result.push_missing(requirement);
            }
        }

        tracing::debug!(
            category = %category,
            missing = ?result.missing_info,
            needs_more_context = result.needs_more_context,
            "Evaluated context sufficiency"
        );
        result
    }

    /// Returns true if nothing required is missing.
    pub fn has_sufficient_context(&self, text: &str, category: Category) -> bool {
        !self.analyze(text, category, None).needs_more_context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::extractor::ExtractionLimits;

    fn evaluator() -> SufficiencyEvaluator {
        SufficiencyEvaluator::new(EntityExtractor::new(ExtractionLimits::new(1950..=2026)), false)
    }

    fn strict_evaluator() -> SufficiencyEvaluator {
        SufficiencyEvaluator::new(EntityExtractor::new(ExtractionLimits::new(1950..=2026)), true)
    }

    mod travel {
        use super::*;

        #[test]
        fn bare_request_misses_destination_origin_duration() {
            let result = evaluator().analyze("Quiero un seguro de viaje", Category::Travel, None);
            assert_eq!(
                result.missing_info(),
                &[FieldKey::Destination, FieldKey::Origin, FieldKey::Duration]
            );
            assert_eq!(result.suggested_questions().len(), 3);
            assert!(result.needs_more_context());
        }

        #[test]
        fn destination_and_duration_known_asks_origin() {
            let result = evaluator().analyze(
                "Voy a viajar a Colombia por 2 semanas",
                Category::Travel,
                None,
            );
            assert_eq!(result.missing_info(), &[FieldKey::Origin]);
            assert_eq!(
                result.next_question(),
                rules::question_for(FieldKey::Origin)
            );
        }

        #[test]
        fn complete_trip_is_sufficient() {
            let result = evaluator().analyze(
                "Hola, busco un seguro de viaje. Salgo de Bogotá hacia Cancún y estaré allí por 15 días.",
                Category::Travel,
                None,
            );
            assert!(!result.needs_more_context());
            assert!(result.missing_info().is_empty());
            assert!(result.suggested_questions().is_empty());
        }

        #[test]
        fn optional_fields_asked_when_configured() {
            let result = strict_evaluator().analyze(
                "Salgo de Bogotá hacia Cancún por 15 días",
                Category::Travel,
                None,
            );
            assert_eq!(
                result.missing_info(),
                &[FieldKey::Travelers, FieldKey::Purpose]
            );
        }
    }

    mod health {
        use super::*;

        #[test]
        fn age_and_gender_known_asks_location_only() {
            let result = evaluator().analyze("Tengo 30 años y soy mujer", Category::Health, None);
            assert_eq!(result.missing_info(), &[FieldKey::Location]);
            assert_eq!(result.suggested_questions().len(), 1);
        }
    }

    mod pet {
        use super::*;

        #[test]
        fn vague_age_still_missing() {
            let result = evaluator().analyze("Mi perro es un cachorro", Category::Pet, None);
            assert_eq!(result.missing_info(), &[FieldKey::PetAge]);
        }

        #[test]
        fn generic_pet_word_still_asks_species() {
            let result =
                evaluator().analyze("Quiero asegurar a mi mascota de 4 años", Category::Pet, None);
            assert_eq!(result.missing_info(), &[FieldKey::Species]);
        }
    }

    mod auto {
        use super::*;

        #[test]
        fn brand_without_year_is_not_enough() {
            let result = evaluator().analyze("Tengo un Toyota en Colombia", Category::Auto, None);
            assert_eq!(result.missing_info(), &[FieldKey::Year]);
        }

        #[test]
        fn known_facts_short_circuit_questions() {
            let known = KnownFacts::new().with("brand", "Toyota").with("year", 2019);
            let result = evaluator().analyze("Quiero un seguro de auto", Category::Auto, Some(&known));
            assert_eq!(result.missing_info(), &[FieldKey::Country]);
        }

        #[test]
        fn blank_known_facts_do_not_satisfy() {
            let known = KnownFacts::new().with("brand", "");
            let result = evaluator().analyze("Quiero un seguro de auto", Category::Auto, Some(&known));
            assert_eq!(
                result.missing_info(),
                &[FieldKey::Brand, FieldKey::Year, FieldKey::Country]
            );
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn general_never_needs_context() {
            for text in ["", "Hola", "Voy a Madrid por 3 días"] {
                let result = evaluator().analyze(text, Category::General, None);
                assert!(result.missing_info().is_empty());
                assert!(!result.needs_more_context());
            }
        }

        #[test]
        fn questions_parallel_missing_info() {
            let result = strict_evaluator().analyze("", Category::Travel, None);
            assert_eq!(result.missing_info().len(), 5);
            for (key, question) in result.missing_with_questions() {
                assert_eq!(Some(question), rules::question_for(key));
            }
        }

        #[test]
        fn order_is_canonical_not_alphabetical() {
            let result = evaluator().analyze("", Category::Health, None);
            assert_eq!(
                result.missing_info(),
                &[FieldKey::Age, FieldKey::Gender, FieldKey::Location]
            );
        }

        #[test]
        fn has_sufficient_context_mirrors_analysis() {
            let evaluator = evaluator();
            assert!(!evaluator.has_sufficient_context("Quiero un seguro de viaje", Category::Travel));
            assert!(evaluator.has_sufficient_context("Hola", Category::General));
        }

        #[test]
        fn serializes_with_camel_case_names() {
            let result = evaluator().analyze("Tengo 30 años y soy mujer", Category::Health, None);
            let json = serde_json::to_value(&result).unwrap();
            assert_eq!(json["category"], "health");
            assert_eq!(json["missingInfo"], serde_json::json!(["location"]));
            assert_eq!(json["needsMoreContext"], true);
            assert_eq!(json["suggestedQuestions"].as_array().unwrap().len(), 1);
        }
    }
}
