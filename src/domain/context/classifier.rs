//! Category classification by keyword matching.
//!
//! Categories are checked in the fixed priority order of the rule table
//! (auto, travel, pet, health). The first category with a matching trigger
//! wins; text with no trigger at all is `General`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::RULEBOOK;
use super::text::{keyword_pattern, ScannedText};
use crate::domain::foundation::Category;

/// One compiled trigger pattern per category, in priority order.
static TRIGGERS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    RULEBOOK
        .iter()
        .map(|rules| {
            let terms = rules.keywords.concat();
            let pattern = keyword_pattern(&terms)
                .unwrap_or_else(|e| panic!("invalid keyword table for {}: {e}", rules.category));
            (rules.category, pattern)
        })
        .collect()
});

/// The outcome of classifying a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// The trigger that decided the category, as written by the user.
    pub trigger: Option<String>,
}

/// Maps free text to a [`Category`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies raw text. Total over all strings; empty text is `General`.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_scanned(&ScannedText::new(text)).category
    }

    /// Classifies prepared text and reports the deciding trigger.
    pub fn classify_scanned(&self, scanned: &ScannedText) -> Classification {
        let classification = TRIGGERS
            .iter()
            .find_map(|(category, pattern)| {
                pattern.find(scanned.folded()).map(|m| Classification {
                    category: *category,
                    trigger: Some(scanned.original_span(m.start(), m.end()).to_string()),
                })
            })
            .unwrap_or(Classification {
                category: Category::General,
                trigger: None,
            });

        tracing::debug!(
            category = %classification.category,
            trigger = ?classification.trigger,
            "Classified conversation"
        );
        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Category {
        CategoryClassifier::new().classify(text)
    }

    mod single_domain {
        use super::*;

        #[test]
        fn travel() {
            assert_eq!(classify("Necesito un seguro para mi viaje a México"), Category::Travel);
            assert_eq!(classify("I need coverage for my trip"), Category::Travel);
        }

        #[test]
        fn auto() {
            assert_eq!(classify("¿Qué seguro de auto me recomiendas?"), Category::Auto);
            assert_eq!(classify("Tengo un Mazda"), Category::Auto);
        }

        #[test]
        fn pet() {
            assert_eq!(classify("Quiero asegurar a mi perro"), Category::Pet);
            assert_eq!(classify("Seguro para mi mascota"), Category::Pet);
            assert_eq!(classify("Tengo un labrador"), Category::Pet);
        }

        #[test]
        fn health() {
            assert_eq!(classify("Busco un seguro de salud"), Category::Health);
            assert_eq!(classify("Quiero un seguro MÉDICO"), Category::Health);
            assert_eq!(classify("quiero un seguro medico"), Category::Health);
        }

        #[test]
        fn general() {
            assert_eq!(classify("Hola, ¿qué tal?"), Category::General);
            assert_eq!(classify(""), Category::General);
            assert_eq!(classify("   "), Category::General);
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn auto_beats_travel() {
            assert_eq!(classify("Voy de viaje en mi carro"), Category::Auto);
        }

        #[test]
        fn travel_beats_pet() {
            assert_eq!(classify("Viaje con mi perro a Lima"), Category::Travel);
        }

        #[test]
        fn pet_beats_health() {
            assert_eq!(classify("Seguro de salud para mi gato"), Category::Pet);
        }

        #[test]
        fn travel_beats_health() {
            assert_eq!(classify("Seguro médico de viaje"), Category::Travel);
        }

        #[test]
        fn order_is_independent_of_word_position() {
            assert_eq!(classify("perro, viaje, carro"), Category::Auto);
            assert_eq!(classify("carro, viaje, perro"), Category::Auto);
        }
    }

    mod matching {
        use super::*;

        #[test]
        fn keywords_do_not_match_inside_other_words() {
            assert_eq!(classify("Necesito una autorización"), Category::General);
            assert_eq!(classify("Hice una petición"), Category::General);
        }

        #[test]
        fn plurals_match() {
            assert_eq!(classify("tengo dos gatos"), Category::Pet);
            assert_eq!(classify("mis vehículos"), Category::Auto);
        }

        #[test]
        fn reports_trigger_as_written() {
            let classification =
                CategoryClassifier::new().classify_scanned(&ScannedText::new("Un seguro MÉDICO"));
            assert_eq!(classification.category, Category::Health);
            assert_eq!(classification.trigger.as_deref(), Some("MÉDICO"));
        }

        #[test]
        fn general_has_no_trigger() {
            let classification = CategoryClassifier::new().classify_scanned(&ScannedText::new("hola"));
            assert_eq!(classification.trigger, None);
        }
    }
}
