//! # CogniBot Engine
//!
//! The matching-and-learning core of CogniBot. Given an utterance, the current
//! [`ConversationContext`](cognibot_core::ConversationContext) and the
//! knowledge base, the engine decides whether to answer, offer a close
//! question, or ask to be taught. A [`Session`] drives that decision over a
//! [`Channel`](cognibot_core::Channel) one turn at a time.

pub mod context;
pub mod matcher;
pub mod session;
pub mod similarity;

#[cfg(test)]
mod test_helpers;

pub use context::ContextTracker;
pub use matcher::{
    Decision, MatchingEngine, SKIP_KEYWORD, Suggestion, SuggestionChoice, SuggestionOutcome,
    TeachOutcome, TeachRequest,
};
pub use session::{Session, SessionOptions, SessionSummary, Turn, TurnOutcome};
pub use similarity::{MatchResult, best_match, find_similar, ratio};
