//! Capitalization-based part-of-speech tagging.
//!
//! Only proper nouns matter to the engine, so the tagger is deliberately
//! coarse: a capitalized token is a proper noun unless it is the pronoun "I"
//! or it opens a sentence and is an ordinary word ("What", "Tell", "Explain"),
//! including regular inflections of one ("Explained", "Cities").

use std::collections::HashSet;

use cognibot_core::{PartOfSpeech, PosTagger};

use crate::lexicon::{self, LEXICON, RANKED_WORDS};
use crate::stopwords::ENGLISH;
use crate::tokenize::trim_punctuation;

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "she", "it", "we", "they", "him", "her", "us", "them",
];

#[derive(Debug, Clone)]
pub struct HeuristicTagger {
    common: HashSet<String>,
}

impl HeuristicTagger {
    /// Common words are the stopwords plus the built-in vocabulary. The
    /// names list is left out so "Paris is lovely" still finds Paris.
    pub fn new() -> Self {
        let common = ENGLISH
            .iter()
            .map(|w| w.to_string())
            .chain(lexicon::entries(RANKED_WORDS))
            .chain(lexicon::entries(LEXICON))
            .collect();
        Self { common }
    }

    fn is_common(&self, lower: &str) -> bool {
        lexicon::is_known_form(lower, |w| self.common.contains(w))
    }

    fn classify(&self, word: &str, sentence_start: bool) -> PartOfSpeech {
        let lower = word.to_lowercase();
        if word.chars().all(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Number;
        }
        if PRONOUNS.contains(&lower.as_str()) {
            return PartOfSpeech::Pronoun;
        }
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if !capitalized || (sentence_start && self.is_common(&lower)) {
            return PartOfSpeech::Other;
        }
        PartOfSpeech::ProperNoun
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PartOfSpeech)> {
        let mut sentence_start = true;
        tokens
            .iter()
            .map(|token| {
                let word = trim_punctuation(token);
                let pos = if word.is_empty() {
                    PartOfSpeech::Other
                } else {
                    self.classify(word, sentence_start)
                };
                if !word.is_empty() {
                    sentence_start = token.ends_with(['.', '?', '!']);
                }
                (word.to_string(), pos)
            })
            .collect()
    }
}
