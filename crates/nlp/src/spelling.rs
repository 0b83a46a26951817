//! Dictionary spelling correction.
//!
//! A frequency-ranked word list plus an edit-distance search: a word that is
//! not in the dictionary is replaced by the most frequent known word one edit
//! away, then two edits away. Known words, inflections of known words, and
//! anything that is not purely alphabetic are left alone.

use std::collections::HashMap;
use std::path::Path;

use cognibot_core::SpellCorrector;
use tracing::debug;

use crate::NlpError;
use crate::lexicon::{self, LEXICON, NAMES, RANKED_WORDS};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Unknown tokens shorter than this are never corrected; one edit turns them
/// into almost anything.
const MIN_CORRECTABLE_LEN: usize = 4;

/// Two-edit candidates are only considered for words at least this long.
const MIN_TWO_EDIT_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct DictionaryCorrector {
    frequencies: HashMap<String, u64>,
    max_distance: u8,
}

impl DictionaryCorrector {
    /// An empty dictionary. Every token passes through unchanged until words
    /// are added.
    pub fn new(max_distance: u8) -> Self {
        Self {
            frequencies: HashMap::new(),
            max_distance: max_distance.clamp(1, 2),
        }
    }

    /// The built-in English vocabulary: the ranked everyday words, then the
    /// broad lexicon and the names list at the lowest frequency.
    pub fn english(max_distance: u8) -> Self {
        let mut corrector = Self::new(max_distance);
        corrector.add_ranked(RANKED_WORDS);
        corrector.add_words(lexicon::entries(LEXICON));
        corrector.add_words(lexicon::entries(NAMES));
        corrector
    }

    /// Add a word list in text form: one entry per line, either `word` or
    /// `word count`. Lines without a count are ranked by position, earliest
    /// highest. Blank lines and `#` comments are skipped.
    pub fn add_ranked(&mut self, list: &str) {
        let entries: Vec<&str> = list
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        let total = entries.len() as u64;

        for (rank, line) in entries.into_iter().enumerate() {
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let count = parts
                .next()
                .and_then(|c| c.parse::<u64>().ok())
                .unwrap_or(total - rank as u64);
            let slot = self.frequencies.entry(word.to_lowercase()).or_insert(0);
            *slot = (*slot).max(count);
        }
    }

    /// Load an extra word list from disk.
    pub fn add_file(&mut self, path: &Path) -> Result<(), NlpError> {
        let content = std::fs::read_to_string(path).map_err(|e| NlpError::WordList {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let before = self.len();
        self.add_ranked(&content);
        debug!(path = %path.display(), added = self.len() - before, "Loaded word list");
        Ok(())
    }

    /// Add words with the minimal count, keeping any higher count already
    /// recorded.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().to_lowercase();
            if is_word(&word) {
                self.frequencies.entry(word).or_insert(1);
            }
        }
    }

    /// Teach the dictionary every alphabetic word of `text`, so learned
    /// vocabulary is never "corrected" away.
    pub fn add_text(&mut self, text: &str) {
        self.add_words(text.split_whitespace().map(crate::trim_punctuation));
    }

    /// Whether `word` is in the dictionary directly or as a regular
    /// inflection of a listed word.
    pub fn knows(&self, word: &str) -> bool {
        lexicon::is_known_form(word, |w| self.frequencies.contains_key(w))
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The most frequent known word among `candidates` with at least
    /// `min_count`; ties go to the alphabetically first so results are
    /// reproducible.
    fn best_known<I>(&self, candidates: I, min_count: u64) -> Option<String>
    where
        I: IntoIterator<Item = String>,
    {
        candidates
            .into_iter()
            .filter_map(|c| self.frequencies.get(&c).map(|f| (*f, c)))
            .filter(|(f, _)| *f >= min_count)
            .max_by(|(fa, a), (fb, b)| fa.cmp(fb).then_with(|| b.cmp(a)))
            .map(|(_, word)| word)
    }

    /// One-edit candidates may be any known word. Two-edit candidates must
    /// come from the ranked list; an unranked word that far away is no more
    /// likely than what was typed.
    fn lookup(&self, word: &str) -> Option<String> {
        let first = edits1(word);
        if let Some(found) = self.best_known(first.iter().cloned(), 1) {
            return Some(found);
        }
        if self.max_distance < 2 || word.chars().count() < MIN_TWO_EDIT_LEN {
            return None;
        }
        self.best_known(first.iter().flat_map(|e| edits1(e)), 2)
    }
}

impl Default for DictionaryCorrector {
    fn default() -> Self {
        Self::english(2)
    }
}

impl SpellCorrector for DictionaryCorrector {
    fn correct(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        if !is_word(&lower) || lower.chars().count() < MIN_CORRECTABLE_LEN || self.knows(&lower) {
            return None;
        }

        let corrected = self.lookup(&lower)?;
        debug!(from = word, to = %corrected, "Spelling correction");
        Some(match_case(word, &corrected))
    }

    fn learn(&mut self, text: &str) {
        self.add_text(text);
    }
}

fn is_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Carry a leading capital over to the correction.
fn match_case(original: &str, corrected: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = corrected.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        corrected.to_string()
    }
}

/// Every string one delete, transpose, replace, or insert away from `word`.
fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = Vec::with_capacity(n * 54 + 26);

    for i in 0..n {
        let mut deleted = chars.clone();
        deleted.remove(i);
        out.push(deleted.into_iter().collect());
    }
    for i in 0..n.saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        out.push(swapped.into_iter().collect());
    }
    for i in 0..n {
        for c in ALPHABET.chars() {
            if chars[i] != c {
                let mut replaced = chars.clone();
                replaced[i] = c;
                out.push(replaced.into_iter().collect());
            }
        }
    }
    for i in 0..=n {
        for c in ALPHABET.chars() {
            let mut inserted = chars.clone();
            inserted.insert(i, c);
            out.push(inserted.into_iter().collect());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn known_word_is_not_corrected() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("weather"), None);
        assert_eq!(c.correct("Weather"), None);
    }

    #[test]
    fn single_edit_typos_are_fixed() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("wether").as_deref(), Some("weather"));
        assert_eq!(c.correct("capitl").as_deref(), Some("capital"));
    }

    #[test]
    fn two_edit_typos_need_distance_two() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("popultin").as_deref(), Some("population"));

        let strict = DictionaryCorrector::english(1);
        assert_eq!(strict.correct("popultin"), None);
    }

    #[test]
    fn leading_capital_is_preserved() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("Wether").as_deref(), Some("Weather"));
    }

    #[test]
    fn non_alphabetic_tokens_pass_through() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("2+2"), None);
        assert_eq!(c.correct("r2d2"), None);
        assert_eq!(c.correct("what?"), None);
    }

    #[test]
    fn short_unknown_tokens_pass_through() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("xq"), None);
        assert_eq!(c.correct("bqt"), None);
    }

    #[test]
    fn two_edits_need_a_long_ranked_word() {
        let mut c = DictionaryCorrector::new(2);
        c.add_ranked("planet 5\nplate 5\n");
        c.add_words(["differ"]);
        assert_eq!(c.correct("eiffel"), None);
        assert_eq!(c.correct("plaxxt"), Some("planet".into()));
        assert_eq!(c.correct("plxxe"), None);
    }

    #[test]
    fn everyday_words_outside_the_ranked_list_are_known() {
        let c = DictionaryCorrector::english(2);
        for word in ["rust", "paris", "bat", "fast", "explain", "volcano", "kangaroo", "python"] {
            assert!(c.knows(word), "{word} should be known");
            assert_eq!(c.correct(word), None, "{word} should be left alone");
        }
    }

    #[test]
    fn inflected_forms_are_not_corrected() {
        let c = DictionaryCorrector::english(2);
        for word in ["explained", "volcanoes", "kangaroos", "cities", "running", "stopped", "quickly"] {
            assert_eq!(c.correct(word), None, "{word} should be left alone");
        }
    }

    #[test]
    fn uncorrectable_word_yields_none() {
        let c = DictionaryCorrector::english(2);
        assert_eq!(c.correct("zzzzzzzzzzqx"), None);
    }

    #[test]
    fn frequency_breaks_candidate_ties() {
        let mut c = DictionaryCorrector::new(1);
        c.add_ranked("cart 10\ncard 50\n");
        assert_eq!(c.correct("carx").as_deref(), Some("card"));
    }

    #[test]
    fn learn_protects_new_vocabulary() {
        let mut c = DictionaryCorrector::new(2);
        c.add_ranked("flight\n");
        assert_eq!(c.correct("fligt").as_deref(), Some("flight"));
        c.learn("what is a fligt");
        assert_eq!(c.correct("fligt"), None);
    }

    #[test]
    fn learned_text_is_protected() {
        let mut c = DictionaryCorrector::english(2);
        assert!(!c.knows("rustacean"));
        c.add_text("Who is the best Rustacean?");
        assert!(c.knows("rustacean"));
        assert_eq!(c.correct("rustacean"), None);
    }

    #[test]
    fn word_list_file_is_loaded() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "# custom\nkubernetes 5\n\nterraform").unwrap();

        let mut c = DictionaryCorrector::new(2);
        c.add_file(tmp.path()).unwrap();
        assert!(c.knows("kubernetes"));
        assert!(c.knows("terraform"));
        assert_eq!(c.correct("kubernets").as_deref(), Some("kubernetes"));
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let mut c = DictionaryCorrector::new(2);
        assert!(c.add_file(Path::new("/nonexistent/words.txt")).is_err());
    }

    #[test]
    fn edits1_covers_all_operations() {
        let edits = edits1("ab");
        assert!(edits.contains(&"a".to_string())); // delete
        assert!(edits.contains(&"ba".to_string())); // transpose
        assert!(edits.contains(&"cb".to_string())); // replace
        assert!(edits.contains(&"abc".to_string())); // insert
    }
}
