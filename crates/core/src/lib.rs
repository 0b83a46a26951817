//! # CogniBot Core
//!
//! Domain types, traits, and error definitions for the CogniBot
//! question-answering agent. This crate has **no framework dependencies**:
//! it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator of the matching engine is defined as a trait here:
//! knowledge storage, spelling correction, part-of-speech tagging, and the
//! conversation channel. Implementations live in their respective crates,
//! which keeps the engine testable with deterministic fakes.

pub mod channel;
pub mod context;
pub mod error;
pub mod knowledge;
pub mod nlp;
pub mod thresholds;

// Re-export key types at crate root for ergonomics
pub use channel::Channel;
pub use context::ConversationContext;
pub use error::{ChannelError, Error, KnowledgeError, Result};
pub use knowledge::{KnowledgeBase, KnowledgeStore};
pub use nlp::{NoCorrection, PartOfSpeech, PosTagger, SpellCorrector};
pub use thresholds::Thresholds;
