//! The two fallback normalization passes.
//!
//! `correct_spelling` is cheap and lossless in word order, so the matching
//! engine always runs it first. `strip_stopwords` is lossy and only runs when
//! the corrected text found nothing.

use cognibot_core::SpellCorrector;

use crate::stopwords::Stopwords;
use crate::tokenize::tokenize;

pub struct TextNormalizer {
    corrector: Box<dyn SpellCorrector>,
    stopwords: Stopwords,
}

impl TextNormalizer {
    pub fn new(corrector: Box<dyn SpellCorrector>, stopwords: Stopwords) -> Self {
        Self {
            corrector,
            stopwords,
        }
    }

    /// Correct each whitespace token in place, keeping any punctuation that
    /// surrounds it. Tokens without a correction are kept as typed.
    pub fn correct_spelling(&self, text: &str) -> String {
        tokenize(text)
            .iter()
            .map(|token| self.correct_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn correct_token(&self, token: &str) -> String {
        let start = token
            .find(|c: char| c.is_alphanumeric())
            .unwrap_or(token.len());
        let end = token
            .rfind(|c: char| c.is_alphanumeric())
            .map(|i| i + token[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(start);
        if start >= end {
            return token.to_string();
        }

        let (prefix, rest) = token.split_at(start);
        let (core, suffix) = rest.split_at(end - start);
        match self.corrector.correct(core) {
            Some(fixed) => format!("{prefix}{fixed}{suffix}"),
            None => token.to_string(),
        }
    }

    /// Remove stopwords, keeping the order of what is left.
    pub fn strip_stopwords(&self, text: &str) -> String {
        self.stopwords.strip(text)
    }

    /// Hand newly stored text to the corrector so its words are left alone
    /// from now on.
    pub fn learn_vocabulary(&mut self, text: &str) {
        self.corrector.learn(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DictionaryCorrector;
    use cognibot_core::NoCorrection;
    use std::collections::HashMap;

    struct FakeCorrector(HashMap<&'static str, &'static str>);

    impl SpellCorrector for FakeCorrector {
        fn correct(&self, word: &str) -> Option<String> {
            self.0.get(word).map(|w| w.to_string())
        }
    }

    fn fake() -> TextNormalizer {
        let fixes = HashMap::from([("wether", "weather"), ("teh", "the")]);
        TextNormalizer::new(Box::new(FakeCorrector(fixes)), Stopwords::english())
    }

    #[test]
    fn corrects_only_known_typos() {
        let n = fake();
        assert_eq!(n.correct_spelling("how is teh wether"), "how is the weather");
    }

    #[test]
    fn keeps_punctuation_around_corrections() {
        let n = fake();
        assert_eq!(n.correct_spelling("wether?"), "weather?");
        assert_eq!(n.correct_spelling("(teh)"), "(the)");
    }

    #[test]
    fn joins_with_single_spaces() {
        let n = TextNormalizer::new(Box::new(NoCorrection), Stopwords::english());
        assert_eq!(n.correct_spelling("  what   is   2+2 "), "what is 2+2");
    }

    #[test]
    fn correct_text_is_unchanged() {
        let n = TextNormalizer::new(Box::new(DictionaryCorrector::english(2)), Stopwords::english());
        let text = "what is the weather today";
        assert_eq!(n.correct_spelling(text), text);
        assert_eq!(n.correct_spelling(&n.correct_spelling(text)), text);
    }

    #[test]
    fn correct_text_outside_the_ranked_list_is_unchanged() {
        let n = TextNormalizer::new(Box::new(DictionaryCorrector::english(2)), Stopwords::english());
        for text in [
            "is rust fast",
            "where is paris",
            "tell me about the bat",
            "explain how volcanoes erupted",
            "who painted the ceilings",
            "describe the eiffel tower",
        ] {
            assert_eq!(n.correct_spelling(text), text);
        }
    }

    #[test]
    fn learned_vocabulary_is_not_corrected() {
        let mut n =
            TextNormalizer::new(Box::new(DictionaryCorrector::english(2)), Stopwords::english());
        assert_eq!(n.correct_spelling("who is albert"), "who is alert");
        n.learn_vocabulary("Who is Albert?");
        assert_eq!(n.correct_spelling("who is albert"), "who is albert");
    }

    #[test]
    fn punctuation_only_tokens_survive() {
        let n = fake();
        assert_eq!(n.correct_spelling("?? wether !!"), "?? weather !!");
    }

    #[test]
    fn strips_stopwords_after_correction() {
        let n = fake();
        let corrected = n.correct_spelling("what is teh wether");
        assert_eq!(n.strip_stopwords(&corrected), "weather");
    }
}
