//! Built-in vocabularies and inflection handling.
//!
//! Three lists ship with the crate:
//!
//! - `words.txt`: a frequency-ranked list of everyday words, highest first
//! - `lexicon.txt`: a broad unranked English vocabulary
//! - `names.txt`: places, languages, people and technology names
//!
//! Inflected forms ("cities", "explained", "running") are accepted when their
//! base form is listed, so the lists only need base forms.

pub(crate) const RANKED_WORDS: &str = include_str!("../data/words.txt");
pub(crate) const LEXICON: &str = include_str!("../data/lexicon.txt");
pub(crate) const NAMES: &str = include_str!("../data/names.txt");

/// Entries of a word list: trimmed, lowercased, blank lines and `#`
/// comments skipped.
pub(crate) fn entries(list: &str) -> impl Iterator<Item = String> + '_ {
    list.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_whitespace().next())
        .map(str::to_lowercase)
}

/// Whether `word` or one of its candidate base forms satisfies `known`.
pub(crate) fn is_known_form(word: &str, known: impl Fn(&str) -> bool) -> bool {
    known(word) || base_forms(word).iter().any(|base| known(base.as_str()))
}

/// Candidate base forms of a regularly inflected English word. Over-generates
/// on purpose: callers only accept a candidate that is itself a known word.
pub(crate) fn base_forms(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if word.len() < 4 || !word.is_ascii() {
        return out;
    }

    for suffix in ["ies", "ied", "ier", "iest", "ily"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            out.push(format!("{stem}y"));
        }
    }

    if let Some(stem) = word.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s')
        && !stem.ends_with('s')
    {
        out.push(stem.to_string());
    }

    for suffix in ["ing", "ed", "er", "est"] {
        if let Some(stem) = word.strip_suffix(suffix)
            && stem.len() >= 2
        {
            out.push(stem.to_string());
            out.push(format!("{stem}e"));
            if let Some(single) = undouble(stem) {
                out.push(single);
            }
        }
    }

    if let Some(stem) = word.strip_suffix("ly")
        && stem.len() >= 3
    {
        out.push(stem.to_string());
        out.push(format!("{stem}le"));
    }
    if let Some(stem) = word.strip_suffix("ness") {
        out.push(stem.to_string());
    }

    out
}

/// "stopp" -> "stop", "bigg" -> "big".
fn undouble(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    (n >= 3 && bytes[n - 1] == bytes[n - 2]).then(|| stem[..n - 1].to_string())
}
