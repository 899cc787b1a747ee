//! Command handlers.

mod conversation_turn;

pub use conversation_turn::{
    ConversationTurnCommand, ConversationTurnError, ConversationTurnHandler,
    ConversationTurnResult, TurnOutcome,
};
