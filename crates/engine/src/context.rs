//! Subject tracking across turns.
//!
//! After each ordinary turn the tracker pulls the proper nouns out of the
//! utterance and makes them the conversation subject. While a subject is set,
//! any utterance that mentions it is treated as a follow-up.

use cognibot_core::{ConversationContext, PartOfSpeech, PosTagger};
use cognibot_nlp::tokenize;
use tracing::debug;

pub struct ContextTracker {
    tagger: Box<dyn PosTagger>,
}

impl ContextTracker {
    pub fn new(tagger: Box<dyn PosTagger>) -> Self {
        Self { tagger }
    }

    /// Whether `utterance` continues the tracked subject: the subject is set
    /// and appears in the utterance, ignoring case.
    pub fn is_follow_up(&self, utterance: &str, context: &ConversationContext) -> bool {
        context
            .subject()
            .is_some_and(|subject| utterance.to_lowercase().contains(&subject.to_lowercase()))
    }

    /// Derive a fresh context from this turn's raw utterance.
    pub fn update_context(&self, utterance: &str) -> ConversationContext {
        let names: Vec<String> = self
            .tagger
            .tag(&tokenize(utterance))
            .into_iter()
            .filter(|(word, pos)| *pos == PartOfSpeech::ProperNoun && !word.is_empty())
            .map(|(word, _)| word)
            .collect();

        if names.is_empty() {
            return ConversationContext::empty();
        }

        let subject = names.join(" ");
        debug!(subject = %subject, "Tracking conversation subject");
        ConversationContext::with_subject(subject, utterance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognibot_nlp::HeuristicTagger;

    /// Tags every token listed in `names` as a proper noun.
    struct FakeTagger(&'static [&'static str]);

    impl PosTagger for FakeTagger {
        fn tag(&self, tokens: &[String]) -> Vec<(String, PartOfSpeech)> {
            tokens
                .iter()
                .map(|t| {
                    let pos = if self.0.contains(&t.as_str()) {
                        PartOfSpeech::ProperNoun
                    } else {
                        PartOfSpeech::Other
                    };
                    (t.clone(), pos)
                })
                .collect()
        }
    }

    fn tracker(names: &'static [&'static str]) -> ContextTracker {
        ContextTracker::new(Box::new(FakeTagger(names)))
    }

    #[test]
    fn mention_of_subject_is_follow_up() {
        let t = tracker(&[]);
        let ctx = ConversationContext::with_subject("Paris", "where is Paris");
        assert!(t.is_follow_up("tell me about Paris weather", &ctx));
        assert!(t.is_follow_up("TELL ME ABOUT PARIS", &ctx));
        assert!(!t.is_follow_up("tell me about weather", &ctx));
    }

    #[test]
    fn no_subject_never_follows_up() {
        let t = tracker(&[]);
        assert!(!t.is_follow_up("anything at all", &ConversationContext::empty()));
        let blank = ConversationContext::with_subject("", "x");
        assert!(!t.is_follow_up("anything at all", &blank));
    }

    #[test]
    fn update_joins_names_in_order() {
        let t = tracker(&["New", "York", "Alice"]);
        let ctx = t.update_context("does Alice live in New York");
        assert_eq!(ctx.subject.as_deref(), Some("Alice New York"));
        assert_eq!(ctx.last_question.as_deref(), Some("does Alice live in New York"));
    }

    #[test]
    fn update_without_names_clears_context() {
        let t = tracker(&["Paris"]);
        let ctx = t.update_context("what time is it");
        assert_eq!(ctx, ConversationContext::empty());
    }

    #[test]
    fn update_is_not_cumulative() {
        let t = tracker(&["Paris", "Rome"]);
        let first = t.update_context("where is Paris");
        assert_eq!(first.subject(), Some("Paris"));
        let second = t.update_context("where is Rome");
        assert_eq!(second.subject(), Some("Rome"));
    }

    #[test]
    fn works_with_heuristic_tagger() {
        let t = ContextTracker::new(Box::new(HeuristicTagger::new()));
        let ctx = t.update_context("Where is Paris?");
        assert_eq!(ctx.subject(), Some("Paris"));
        assert!(t.is_follow_up("what is the population of paris", &ctx));
    }

    #[test]
    fn sentence_opening_verb_is_not_part_of_the_subject() {
        let t = ContextTracker::new(Box::new(HeuristicTagger::new()));
        let ctx = t.update_context("Explain Rust to me");
        assert_eq!(ctx.subject(), Some("Rust"));
        assert!(t.is_follow_up("tell me more about rust", &ctx));
    }
}
