//! Conversation turns and the cumulative user text the engine analyzes.

use serde::{Deserialize, Serialize};

use super::text::normalize_whitespace;

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instructions (typically invisible to user).
    System,
    /// User input.
    User,
    /// AI assistant response.
    Assistant,
}

impl Role {
    /// Returns true if turns with this role feed classification and extraction.
    pub fn is_user_authored(&self) -> bool {
        matches!(self, Self::User)
    }
}

/// A single message in a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// All user-authored text of a session, oldest first, whitespace-normalized.
///
/// # Invariants
///
/// - Only user turns are included; assistant and system turns are skipped.
/// - Text only grows until [`clear`](Self::clear) is called, so facts found
///   in earlier turns stay found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationText(String);

impl ConversationText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the text from a full turn history.
    pub fn from_turns<'a>(turns: impl IntoIterator<Item = &'a ConversationTurn>) -> Self {
        let mut text = Self::new();
        for turn in turns {
            text.push_turn(turn);
        }
        text
    }

    /// Appends a turn if it is user-authored.
    pub fn push_turn(&mut self, turn: &ConversationTurn) {
        if turn.role.is_user_authored() {
            self.push_user_text(&turn.content);
        }
    }

    /// Appends user text.
    pub fn push_user_text(&mut self, content: &str) {
        let normalized = normalize_whitespace(content);
        if normalized.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(&normalized);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forgets everything said so far.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl AsRef<str> for ConversationText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
