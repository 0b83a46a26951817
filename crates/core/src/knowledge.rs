//! Knowledge base model and the storage trait behind it.
//!
//! The knowledge base is a flat record of everything the bot has been taught:
//! - `questions` is the append-only history of learned questions (duplicates allowed)
//! - `answers` maps a lowercase question to its current answer
//!
//! A question may stay in `questions` after its answer was overwritten; entries
//! are never removed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::KnowledgeError;

/// The persisted question/answer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Learned questions in insertion order
    #[serde(default)]
    pub questions: Vec<String>,

    /// Lowercase question -> answer
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The candidate list every lookup is matched against.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Look up the stored answer for an exact question key.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    /// Register a brand-new question/answer pair.
    ///
    /// The question is lowercased before it is stored. Returns the stored key.
    pub fn learn(&mut self, question: &str, answer: &str) -> String {
        let key = question.to_lowercase();
        self.answers.insert(key.clone(), answer.to_string());
        self.questions.push(key.clone());
        key
    }

    /// Replace the answer of an existing question without touching the
    /// question history.
    pub fn update_answer(&mut self, question: &str, answer: &str) {
        self.answers.insert(question.to_string(), answer.to_string());
    }

    /// Number of entries in the question history.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions with duplicates removed, first occurrence wins.
    pub fn distinct_questions(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.questions
            .iter()
            .filter(|q| seen.insert(q.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// The storage backend for a knowledge base.
///
/// Implementations: JSON file, in-memory (for testing).
pub trait KnowledgeStore {
    /// The backend name (e.g., "json", "in_memory").
    fn name(&self) -> &str;

    /// Load the persisted knowledge base.
    ///
    /// Never fails: a missing or unreadable document yields an empty base.
    fn load(&self) -> KnowledgeBase;

    /// Persist the whole knowledge base, replacing whatever was stored.
    fn save(&self, knowledge: &KnowledgeBase) -> std::result::Result<(), KnowledgeError>;
}
