//! Ordered chat log for one session.

use crate::{ChatTurn, Speaker};

#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text.into());
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.push(Speaker::Assistant, text.into());
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.turns.push(ChatTurn { speaker, text });
    }

    /// All turns, oldest first
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Drop the whole conversation
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} chat turns", self.turns.len());
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
