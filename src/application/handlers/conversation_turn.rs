//! ConversationTurnHandler - Decide whether to ask questions or show plans

use std::sync::Arc;

use serde::Serialize;

use crate::domain::context::{
    ContextAnalysisResult, ContextEngine, ConversationText, ConversationTurn, GateDecision,
    KnownFacts,
};
use crate::domain::foundation::Category;
use crate::ports::{CatalogError, PlanCandidate, PlanCatalog};

/// Command to process the latest state of a conversation
#[derive(Debug, Clone, Default)]
pub struct ConversationTurnCommand {
    /// Full turn history, oldest first
    pub turns: Vec<ConversationTurn>,
    /// Facts carried over from earlier turns or other sources
    pub known_facts: KnownFacts,
    /// Skip classification and use this category
    pub category: Option<Category>,
}

impl ConversationTurnCommand {
    pub fn new(turns: Vec<ConversationTurn>) -> Self {
        Self {
            turns,
            ..Default::default()
        }
    }

    pub fn with_known_facts(mut self, known_facts: KnownFacts) -> Self {
        self.known_facts = known_facts;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// What the chat should do next
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Required facts are missing; ask these questions in order
    AskQuestions(Vec<String>),
    /// Context is sufficient and the catalog returned plans
    ShowPlans(Vec<PlanCandidate>),
    /// Context is sufficient but nothing matched
    NoPlansAvailable,
}

impl TurnOutcome {
    pub fn is_show_plans(&self) -> bool {
        matches!(self, Self::ShowPlans(_))
    }
}

/// Result of processing a turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurnResult {
    pub analysis: ContextAnalysisResult,
    /// Known facts merged with everything extracted this turn
    pub facts: KnownFacts,
    pub outcome: TurnOutcome,
}

impl ConversationTurnResult {
    pub fn category(&self) -> Category {
        self.analysis.category()
    }
}

/// Error type for processing a turn
#[derive(Debug, thiserror::Error)]
pub enum ConversationTurnError {
    #[error("Plan catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Handler for conversation turns
pub struct ConversationTurnHandler {
    engine: Arc<ContextEngine>,
    catalog: Arc<dyn PlanCatalog>,
}

impl ConversationTurnHandler {
    pub fn new(engine: Arc<ContextEngine>, catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { engine, catalog }
    }

    pub async fn handle(
        &self,
        cmd: ConversationTurnCommand,
    ) -> Result<ConversationTurnResult, ConversationTurnError> {
        // 1. Collect user text and assess it
        let text = ConversationText::from_turns(&cmd.turns);
        let assessment = self
            .engine
            .assess(text.as_str(), cmd.category, Some(&cmd.known_facts));

        let mut facts = cmd.known_facts;
        facts.merge_extracted(&assessment.extracted);
        let analysis = assessment.analysis;

        // 2. Ask before consulting the catalog
        if analysis.needs_more_context() {
            tracing::info!(
                category = %analysis.category(),
                missing = ?analysis.missing_info(),
                "Context insufficient, asking clarifying questions"
            );
            return Ok(ConversationTurnResult {
                outcome: TurnOutcome::AskQuestions(analysis.suggested_questions().to_vec()),
                analysis,
                facts,
            });
        }

        // 3. Query the catalog
        let plans = self
            .catalog
            .find_plans(analysis.category(), &facts)
            .await
            .map_err(|e| {
                tracing::warn!(category = %analysis.category(), error = %e, "Plan catalog query failed");
                e
            })?;

        // 4. Every "show plans" decision goes through the gate
        let outcome = match self.engine.gate_decision(&analysis, &plans) {
            GateDecision::Allowed => {
                tracing::info!(
                    category = %analysis.category(),
                    plans = plans.len(),
                    "Showing plans"
                );
                TurnOutcome::ShowPlans(plans)
            }
            decision => {
                tracing::warn!(
                    category = %analysis.category(),
                    ?decision,
                    "Recommendation gate blocked plans"
                );
                TurnOutcome::NoPlansAvailable
            }
        };

        Ok(ConversationTurnResult {
            analysis,
            facts,
            outcome,
        })
    }
}
