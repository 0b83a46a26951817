//! Whitespace tokenization shared by the normalizer and the tagger.

/// Split an utterance into whitespace-separated tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Strip leading and trailing punctuation, keeping inner characters
/// (so "2+2" and "don't" survive intact).
pub fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(tokenize("  what   is\tthis "), vec!["what", "is", "this"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn trims_outer_punctuation_only() {
        assert_eq!(trim_punctuation("Paris?"), "Paris");
        assert_eq!(trim_punctuation("\"don't\""), "don't");
        assert_eq!(trim_punctuation("2+2"), "2+2");
        assert_eq!(trim_punctuation("?!"), "");
    }
}
