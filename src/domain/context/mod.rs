//! Conversational context sufficiency.
//!
//! Decides which insurance category a conversation is about, which required
//! facts it already states, and which clarifying questions remain before
//! recommendations may be shown.

mod classifier;
mod conversation;
mod engine;
mod evaluator;
mod extractor;
mod facts;
mod gate;
pub mod lexicon;
pub mod rules;
pub mod text;

pub use classifier::{CategoryClassifier, Classification};
pub use conversation::{ConversationText, ConversationTurn, Role};
pub use engine::{default_engine, Assessment, ContextEngine};
pub use evaluator::{ContextAnalysisResult, SufficiencyEvaluator};
pub use extractor::{EntityExtractor, ExtractionLimits, FieldPresence, FieldPresenceMap};
pub use facts::KnownFacts;
pub use gate::{GateDecision, RecommendationGate};
pub use rules::{FieldRequirement, Necessity};
