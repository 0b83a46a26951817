//! The fixed English stopword set.

use std::collections::HashSet;

use crate::tokenize::{tokenize, trim_punctuation};

/// Standard English function words.
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A case-insensitive stopword set.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The built-in English set.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The English set plus caller-supplied words.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::english();
        set.words
            .extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        set.words.remove("");
        set
    }

    /// Membership test, ignoring case and surrounding punctuation.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&trim_punctuation(token).to_lowercase())
    }

    /// Drop every stopword from `text`, keeping the remaining order.
    pub fn strip(&self, text: &str) -> String {
        tokenize(text)
            .into_iter()
            .filter(|t| !self.contains(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_function_words_in_order() {
        let sw = Stopwords::english();
        assert_eq!(sw.strip("what is the capital of France"), "capital France");
    }

    #[test]
    fn membership_ignores_case_and_punctuation() {
        let sw = Stopwords::english();
        assert!(sw.contains("The"));
        assert!(sw.contains("is?"));
        assert!(!sw.contains("weather"));
    }

    #[test]
    fn all_stopwords_strip_to_empty() {
        assert_eq!(Stopwords::english().strip("what is it"), "");
    }

    #[test]
    fn extra_words_are_added() {
        let sw = Stopwords::with_extra(["Please", "  "]);
        assert!(sw.contains("please"));
        assert_eq!(sw.len(), Stopwords::english().len() + 1);
        assert_eq!(sw.strip("please tell me a joke"), "tell joke");
    }
}
