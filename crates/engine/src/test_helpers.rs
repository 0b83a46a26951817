//! Shared test helpers for engine tests.

use std::collections::HashMap;

use cognibot_core::{SpellCorrector, Thresholds};
use cognibot_nlp::{DictionaryCorrector, HeuristicTagger, Stopwords, TextNormalizer};

use crate::context::ContextTracker;
use crate::matcher::MatchingEngine;

/// A corrector with a fixed typo table; every other word passes through.
pub struct FixedCorrector(HashMap<String, String>);

impl FixedCorrector {
    pub fn new(fixes: &[(&str, &str)]) -> Self {
        Self(
            fixes
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }
}

impl SpellCorrector for FixedCorrector {
    fn correct(&self, word: &str) -> Option<String> {
        self.0.get(word).cloned()
    }
}

pub fn engine_with(fixes: &[(&str, &str)], thresholds: Thresholds) -> MatchingEngine {
    MatchingEngine::new(
        TextNormalizer::new(Box::new(FixedCorrector::new(fixes)), Stopwords::english()),
        ContextTracker::new(Box::new(HeuristicTagger::new())),
        thresholds,
    )
}

pub fn engine_with_fixes(fixes: &[(&str, &str)]) -> MatchingEngine {
    engine_with(fixes, Thresholds::default())
}

/// An engine that never corrects spelling.
pub fn engine() -> MatchingEngine {
    engine_with_fixes(&[])
}

/// An engine with the built-in English dictionary.
pub fn dictionary_engine() -> MatchingEngine {
    MatchingEngine::new(
        TextNormalizer::new(Box::new(DictionaryCorrector::english(2)), Stopwords::english()),
        ContextTracker::new(Box::new(HeuristicTagger::new())),
        Thresholds::default(),
    )
}
