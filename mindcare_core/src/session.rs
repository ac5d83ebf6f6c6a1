//! Per-user session state and its command handlers.
//!
//! A `UserSession` owns one mood log and one chat log. Front ends create one
//! per active user and route every interaction through the `on_*` handlers.

use crate::{classifier, ChatSession, EntryStore, MoodEntry, ResponseCategory};

#[derive(Clone, Debug, Default)]
pub struct UserSession {
    entries: EntryStore,
    chat: ChatSession,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a mood entry (bounds are the caller's precondition)
    pub fn on_append(&mut self, entry: MoodEntry) {
        self.entries.append(entry);
        tracing::info!("Logged mood entry #{}", self.entries.count());
    }

    /// Record a user message and the classifier's reply
    ///
    /// An empty message is ignored and returns `None`.
    pub fn on_send(&mut self, text: &str) -> Option<ResponseCategory> {
        if text.is_empty() {
            return None;
        }

        let (category, reply) = classifier::respond(text);
        self.chat.append_user(text);
        self.chat.append_assistant(reply);
        Some(category)
    }

    /// Clear the conversation; the mood log is untouched
    pub fn on_clear(&mut self) {
        self.chat.clear();
    }

    pub fn entries(&self) -> &EntryStore {
        &self.entries
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mood, Speaker};
    use chrono::NaiveDate;

    #[test]
    fn test_on_send_appends_user_then_assistant() {
        crate::logging::init_test();
        let mut session = UserSession::new();

        let category = session.on_send("I'm feeling anxious today");
        assert_eq!(category, Some(ResponseCategory::Anxiety));

        let turns = session.chat().all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].text, "I'm feeling anxious today");
        assert_eq!(turns[1].speaker, Speaker::Assistant);
        assert_eq!(turns[1].text, ResponseCategory::Anxiety.response());
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut session = UserSession::new();
        assert_eq!(session.on_send(""), None);
        assert!(session.chat().is_empty());
    }

    #[test]
    fn test_whitespace_message_is_still_sent() {
        let mut session = UserSession::new();
        assert_eq!(session.on_send("   "), Some(ResponseCategory::Generic));
        assert_eq!(session.chat().len(), 2);
        assert_eq!(session.chat().all()[0].text, "   ");
    }

    #[test]
    fn test_on_clear_keeps_entries() {
        let mut session = UserSession::new();
        session.on_append(MoodEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Mood::Content,
            6,
            7.0,
        ));
        session.on_send("hello");
        session.on_clear();

        assert!(session.chat().all().is_empty());
        assert_eq!(session.entries().count(), 1);
    }
}
