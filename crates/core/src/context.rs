//! Conversation context carried from one turn to the next.

use serde::{Deserialize, Serialize};

/// What the previous turn was about.
///
/// Re-derived from scratch after every non-follow-up turn; never accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Proper-noun phrase from the last question that had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The raw question that produced `subject`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_question: Option<String>,
}

impl ConversationContext {
    /// A context with no tracked subject.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_subject(subject: impl Into<String>, last_question: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            last_question: Some(last_question.into()),
        }
    }

    /// The subject, if one is set and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }
}
