//! Linguistic capabilities consumed by the engine.
//!
//! The engine never does spelling correction or tagging itself. It asks these
//! two small traits, so tests can swap in deterministic fakes.

use serde::{Deserialize, Serialize};

/// Per-word spelling correction.
pub trait SpellCorrector {
    /// Return a replacement for `word`, or `None` when the word is already
    /// correct or no suggestion exists.
    fn correct(&self, word: &str) -> Option<String>;

    /// Record the words of newly learned text as correct. Correctors
    /// without a vocabulary ignore this.
    fn learn(&mut self, _text: &str) {}
}

/// Coarse part-of-speech classes. Only proper nouns drive engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    ProperNoun,
    Pronoun,
    Number,
    Other,
}

/// Part-of-speech tagging over an already tokenized utterance.
pub trait PosTagger {
    /// Tag each token, preserving order and length.
    fn tag(&self, tokens: &[String]) -> Vec<(String, PartOfSpeech)>;
}

impl<T: SpellCorrector + ?Sized> SpellCorrector for Box<T> {
    fn correct(&self, word: &str) -> Option<String> {
        (**self).correct(word)
    }

    fn learn(&mut self, text: &str) {
        (**self).learn(text)
    }
}

impl<T: PosTagger + ?Sized> PosTagger for Box<T> {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PartOfSpeech)> {
        (**self).tag(tokens)
    }
}

/// A corrector that never suggests anything. Used when spell correction is
/// disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl SpellCorrector for NoCorrection {
    fn correct(&self, _word: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_correction_passes_everything() {
        assert_eq!(NoCorrection.correct("teh"), None);
    }

    #[test]
    fn boxed_corrector_delegates() {
        struct Upper;
        impl SpellCorrector for Upper {
            fn correct(&self, word: &str) -> Option<String> {
                Some(word.to_uppercase())
            }
        }
        let boxed: Box<dyn SpellCorrector> = Box::new(Upper);
        assert_eq!(boxed.correct("abc"), Some("ABC".into()));
    }

    #[test]
    fn boxed_corrector_forwards_learning() {
        #[derive(Default)]
        struct Recorder(Vec<String>);
        impl SpellCorrector for Recorder {
            fn correct(&self, _word: &str) -> Option<String> {
                None
            }
            fn learn(&mut self, text: &str) {
                self.0.push(text.to_string());
            }
        }
        let mut boxed = Box::new(Recorder::default());
        SpellCorrector::learn(&mut boxed, "who is albert");
        assert_eq!(boxed.0, ["who is albert"]);
    }
}
