//! Language primitives for CogniBot.
//!
//! Everything here sits behind the capability traits defined in
//! `cognibot-core::nlp`, so the engine can run against these real
//! implementations or against deterministic fakes:
//!
//! - [`DictionaryCorrector`]: edit-distance spelling correction over a word list
//! - [`HeuristicTagger`]: capitalization-based proper-noun detection
//! - [`Stopwords`]: the fixed English stopword set
//! - [`TextNormalizer`]: the two fallback passes the matching engine runs

mod lexicon;
pub mod normalizer;
pub mod spelling;
pub mod stopwords;
pub mod tagger;
pub mod tokenize;

pub use normalizer::TextNormalizer;
pub use spelling::DictionaryCorrector;
pub use stopwords::Stopwords;
pub use tagger::HeuristicTagger;
pub use tokenize::{tokenize, trim_punctuation};

use std::path::PathBuf;

/// Errors from loading language resources.
#[derive(Debug, thiserror::Error)]
pub enum NlpError {
    #[error("Failed to read word list at {path}: {reason}")]
    WordList { path: PathBuf, reason: String },
}
