//! Recommendation gate: the single check that authorizes showing results.
//!
//! Results may be presented only when no required fact is missing and the
//! catalog actually returned candidates. Claiming results without passing
//! this gate is an integration bug.

use serde::Serialize;

use super::evaluator::ContextAnalysisResult;

/// Why the gate allowed or blocked showing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Context is sufficient and candidates exist.
    Allowed,
    /// Required facts are still missing.
    MissingContext,
    /// Context is sufficient but there is nothing to show.
    NoCandidates,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Combines sufficiency and candidate availability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGate;

impl RecommendationGate {
    pub fn new() -> Self {
        Self
    }

    /// Explains the gate outcome. Missing context is reported first.
    pub fn decide<T>(&self, result: &ContextAnalysisResult, candidates: &[T]) -> GateDecision {
        if result.needs_more_context() {
            GateDecision::MissingContext
        } else if candidates.is_empty() {
            GateDecision::NoCandidates
        } else {
            GateDecision::Allowed
        }
    }

    /// Returns true iff context is sufficient and `candidates` is non-empty.
    pub fn can_show_plans<T>(&self, result: &ContextAnalysisResult, candidates: &[T]) -> bool {
        self.decide(result, candidates).is_allowed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::evaluator::SufficiencyEvaluator;
    use crate::domain::context::extractor::{EntityExtractor, ExtractionLimits};
    use crate::domain::foundation::Category;

    fn analyze(text: &str, category: Category) -> ContextAnalysisResult {
        SufficiencyEvaluator::new(EntityExtractor::new(ExtractionLimits::new(1950..=2026)), false)
            .analyze(text, category, None)
    }

    fn sufficient() -> ContextAnalysisResult {
        analyze("Salgo de Lima hacia Madrid por 10 días", Category::Travel)
    }

    fn insufficient() -> ContextAnalysisResult {
        analyze("Quiero un seguro de viaje", Category::Travel)
    }

    #[test]
    fn empty_candidates_never_allowed() {
        let gate = RecommendationGate::new();
        let none: [&str; 0] = [];
        assert!(!gate.can_show_plans(&sufficient(), &none));
        assert!(!gate.can_show_plans(&insufficient(), &none));
        assert_eq!(gate.decide(&sufficient(), &none), GateDecision::NoCandidates);
    }

    #[test]
    fn missing_context_never_allowed() {
        let gate = RecommendationGate::new();
        let plans = ["plan-a", "plan-b"];
        assert!(!gate.can_show_plans(&insufficient(), &plans));
        assert_eq!(gate.decide(&insufficient(), &plans), GateDecision::MissingContext);
    }

    #[test]
    fn sufficient_with_candidates_allowed() {
        let gate = RecommendationGate::new();
        assert!(gate.can_show_plans(&sufficient(), &["plan-a"]));
        assert!(gate.can_show_plans(&ContextAnalysisResult::sufficient(Category::General), &[1]));
    }

    #[test]
    fn missing_context_reported_before_missing_candidates() {
        let gate = RecommendationGate::new();
        let none: [u8; 0] = [];
        assert_eq!(gate.decide(&insufficient(), &none), GateDecision::MissingContext);
    }
}
