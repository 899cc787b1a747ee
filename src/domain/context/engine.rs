//! The context engine facade.
//!
//! Bundles classification, extraction, sufficiency evaluation and the
//! recommendation gate behind one immutable value built from
//! [`EngineConfig`].

use once_cell::sync::Lazy;

use super::classifier::{CategoryClassifier, Classification};
use super::evaluator::{ContextAnalysisResult, SufficiencyEvaluator};
use super::extractor::{EntityExtractor, ExtractionLimits, FieldPresenceMap};
use super::facts::KnownFacts;
use super::gate::{GateDecision, RecommendationGate};
use super::text::ScannedText;
use crate::config::EngineConfig;
use crate::domain::foundation::Category;

static DEFAULT_ENGINE: Lazy<ContextEngine> = Lazy::new(ContextEngine::default);

/// The process-wide engine built from `EngineConfig::default()`.
pub fn default_engine() -> &'static ContextEngine {
    &DEFAULT_ENGINE
}

/// Everything the engine learned from one pass over a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub classification: Classification,
    pub extracted: FieldPresenceMap,
    pub analysis: ContextAnalysisResult,
}

impl Assessment {
    pub fn category(&self) -> Category {
        self.analysis.category()
    }
}

/// Immutable context-sufficiency engine.
///
/// Limits that depend on the clock (the newest vehicle year) are resolved
/// once here, so repeated calls on the same engine are deterministic.
#[derive(Debug, Clone)]
pub struct ContextEngine {
    classifier: CategoryClassifier,
    evaluator: SufficiencyEvaluator,
    gate: RecommendationGate,
}

impl ContextEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let limits = ExtractionLimits::new(config.vehicle_years());
        Self {
            classifier: CategoryClassifier::new(),
            evaluator: SufficiencyEvaluator::new(
                EntityExtractor::new(limits),
                config.ask_optional_fields,
            ),
            gate: RecommendationGate::new(),
        }
    }

    pub fn extractor(&self) -> &EntityExtractor {
        self.evaluator.extractor()
    }

    pub fn classify(&self, text: &str) -> Category {
        self.classifier.classify(text)
    }

    pub fn extract_fields(&self, text: &str, category: Category) -> FieldPresenceMap {
        self.extractor().extract(text, category)
    }

    pub fn analyze_context_needs(
        &self,
        text: &str,
        category: Category,
        known: Option<&KnownFacts>,
    ) -> ContextAnalysisResult {
        self.evaluator.analyze(text, category, known)
    }

    pub fn has_sufficient_context(&self, text: &str, category: Category) -> bool {
        self.evaluator.has_sufficient_context(text, category)
    }

    pub fn can_show_plans<T>(&self, result: &ContextAnalysisResult, candidates: &[T]) -> bool {
        self.gate.can_show_plans(result, candidates)
    }

    pub fn gate_decision<T>(&self, result: &ContextAnalysisResult, candidates: &[T]) -> GateDecision {
        self.gate.decide(result, candidates)
    }

    /// Classifies (unless `category` is given), extracts and evaluates in a
    /// single scan of `text`.
    pub fn assess(
        &self,
        text: &str,
        category: Option<Category>,
        known: Option<&KnownFacts>,
    ) -> Assessment {
        let scanned = ScannedText::new(text);
        let classification = match category {
            Some(category) => Classification {
                category,
                trigger: None,
            },
            None => self.classifier.classify_scanned(&scanned),
        };
        let extracted = self
            .extractor()
            .extract_scanned(&scanned, classification.category);
        let analysis = self.evaluator.evaluate(&extracted, known);

        Assessment {
            classification,
            extracted,
            analysis,
        }
    }
}

impl Default for ContextEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
