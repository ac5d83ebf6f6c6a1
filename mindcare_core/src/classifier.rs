//! Rule-based chat responder.
//!
//! Messages are lower-cased and checked against fixed keyword sets in
//! priority order. The first category with a keyword anywhere in the text
//! wins; matching is plain substring search, so "unhappy" contains "happy".

use crate::ResponseCategory;

/// Conversation starters offered when the user doesn't know what to say
pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "I'm feeling anxious today",
    "I've been feeling down",
    "I'm having trouble sleeping",
];

/// Keyword rules, checked top to bottom
const RULES: [(ResponseCategory, &[&str]); 5] = [
    (
        ResponseCategory::Anxiety,
        &["anxious", "anxiety", "nervous", "worry"],
    ),
    (
        ResponseCategory::Depression,
        &["sad", "depressed", "down", "hopeless"],
    ),
    (
        ResponseCategory::Stress,
        &["stress", "stressed", "overwhelmed"],
    ),
    (
        ResponseCategory::Positive,
        &["happy", "good", "great", "better"],
    ),
    (
        ResponseCategory::SleepIssue,
        &["sleep", "tired", "exhausted", "energy"],
    ),
];

impl ResponseCategory {
    /// Keywords that select this category (empty for `Generic`)
    pub fn keywords(self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// The canned reply for this category
    pub fn response(self) -> &'static str {
        match self {
            ResponseCategory::Anxiety => "I understand you're feeling anxious. Have you tried any breathing exercises? They can help calm your nervous system. Would you like me to guide you through one?",
            ResponseCategory::Depression => "I'm sorry to hear you're feeling down. Remember that feelings are temporary, and it's okay to not be okay. Would talking about what's bothering you help?",
            ResponseCategory::Stress => "It sounds like you're feeling stressed. Breaking tasks into smaller steps can make them more manageable. Would you like to try a quick mindfulness exercise?",
            ResponseCategory::Positive => "I'm glad to hear you're feeling good! It's wonderful that you're experiencing positive emotions. What do you think contributed to this mood?",
            ResponseCategory::SleepIssue => "Sleep issues can significantly impact mental health. Maintaining a consistent sleep schedule and creating a relaxing bedtime routine can help. Would you like some sleep hygiene tips?",
            ResponseCategory::Generic => "Thank you for sharing. I'm here to support you. Would you like to talk more about what you're experiencing, or perhaps try a coping strategy?",
        }
    }
}

/// Classify a message; always returns a category
pub fn classify(text: &str) -> ResponseCategory {
    let lowered = text.to_lowercase();

    let category = RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(*k)))
        .map(|(category, _)| *category)
        .unwrap_or(ResponseCategory::Generic);

    tracing::debug!("Classified message as {:?}", category);
    category
}

/// Classify a message and pick its canned reply
pub fn respond(text: &str) -> (ResponseCategory, &'static str) {
    let category = classify(text);
    (category, category.response())
}
