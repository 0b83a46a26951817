//! The per-turn decision: answer, suggest, or ask to be taught.
//!
//! ```text
//! FOLLOW_UP_CHECK -> NORMALIZE_AND_MATCH -> DECIDE -> ANSWER | SUGGEST | TEACH
//! ```
//!
//! Matching runs in two passes. Pass 1 spell-corrects the utterance and looks
//! for a viable stored question. Pass 2 only runs when pass 1 found nothing at
//! all, and additionally strips stopwords. A viable candidate is answered
//! directly only above the answer threshold; otherwise the raw utterance is
//! compared again to find a "did you mean" suggestion.
//!
//! `decide` never mutates anything. Mutations happen in `resolve_teach` and
//! `resolve_suggestion`, once the user has replied. Both also hand the stored
//! question to the spelling corrector, so it is recognized verbatim on the
//! very next turn.

use cognibot_core::{ConversationContext, KnowledgeBase, Thresholds};
use cognibot_nlp::TextNormalizer;
use tracing::{debug, info};

use crate::context::ContextTracker;
use crate::similarity::{MatchResult, best_match, find_similar};

/// The reserved reply that declines teaching.
pub const SKIP_KEYWORD: &str = "skip";

/// What the engine wants to do with an utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The utterance mentions the tracked subject; reply with a clarification.
    FollowUp { subject: String },

    /// A stored question matched with high confidence.
    Answer {
        question: String,
        answer: String,
        confidence: f64,
    },

    /// No confident match, but a stored question is close enough to offer.
    Suggest(Suggestion),

    /// Nothing close; ask the user for an answer.
    Teach(TeachRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The raw utterance of this turn
    pub utterance: String,
    /// The stored question being offered
    pub question: String,
    /// Its current answer, if the mapping has one
    pub answer: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeachRequest {
    pub utterance: String,
}

/// The user's reply to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionChoice {
    /// Replace the suggested question's answer
    Update,
    /// Register the utterance as its own question
    New,
    /// Anything else
    Decline,
}

impl SuggestionChoice {
    pub fn parse(reply: &str) -> Self {
        let reply = reply.trim();
        if reply.eq_ignore_ascii_case("update") {
            Self::Update
        } else if reply.eq_ignore_ascii_case("new") {
            Self::New
        } else {
            Self::Decline
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeachOutcome {
    /// A new pair was stored under `question`
    Learned { question: String },
    /// The user typed the skip keyword (or nothing)
    DeclineTeach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The suggested question's answer was replaced
    Updated { question: String },
    /// The utterance was registered as a new pair
    Registered { question: String },
    DeclineSuggestion,
}

impl TeachOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Learned { .. })
    }
}

impl SuggestionOutcome {
    pub fn mutated(&self) -> bool {
        !matches!(self, Self::DeclineSuggestion)
    }
}

pub struct MatchingEngine {
    normalizer: TextNormalizer,
    tracker: ContextTracker,
    thresholds: Thresholds,
}

impl MatchingEngine {
    pub fn new(normalizer: TextNormalizer, tracker: ContextTracker, thresholds: Thresholds) -> Self {
        Self {
            normalizer,
            tracker,
            thresholds,
        }
    }

    /// Decide how to respond to `utterance`. Pure: neither the context nor
    /// the knowledge base is touched.
    pub fn decide(
        &self,
        utterance: &str,
        context: &ConversationContext,
        knowledge: &KnowledgeBase,
    ) -> Decision {
        if self.tracker.is_follow_up(utterance, context) {
            if let Some(subject) = context.subject() {
                debug!(subject, "Follow-up on tracked subject");
                return Decision::FollowUp {
                    subject: subject.to_string(),
                };
            }
        }

        let primary = self.lookup(utterance, knowledge);
        if let Some(question) = primary.candidate.as_deref() {
            if primary.confidence > self.thresholds.answer_threshold {
                if let Some(answer) = knowledge.answer_for(question) {
                    return Decision::Answer {
                        question: question.to_string(),
                        answer: answer.to_string(),
                        confidence: primary.confidence,
                    };
                }
                debug!(question, "Matched question has no stored answer");
            }
        }

        let similar = find_similar(
            &utterance.to_lowercase(),
            knowledge.questions(),
            self.thresholds.suggestion_threshold,
        );
        match similar.candidate {
            Some(question) => {
                debug!(question = %question, confidence = similar.confidence, "Suggesting similar question");
                Decision::Suggest(Suggestion {
                    utterance: utterance.to_string(),
                    answer: knowledge.answer_for(&question).map(str::to_string),
                    question,
                    confidence: similar.confidence,
                })
            }
            None => Decision::Teach(TeachRequest {
                utterance: utterance.to_string(),
            }),
        }
    }

    /// The two normalization passes against the stored questions.
    pub fn lookup(&self, utterance: &str, knowledge: &KnowledgeBase) -> MatchResult {
        let cutoff = self.thresholds.viability_cutoff;

        let corrected = self.normalizer.correct_spelling(&utterance.to_lowercase());
        let first = best_match(&corrected, knowledge.questions(), cutoff);
        debug!(query = %corrected, candidate = ?first.candidate, confidence = first.confidence, "Pass 1");
        if first.is_match() {
            return first;
        }

        let stripped = self.normalizer.strip_stopwords(&corrected);
        let second = best_match(&stripped, knowledge.questions(), cutoff);
        debug!(query = %stripped, candidate = ?second.candidate, confidence = second.confidence, "Pass 2");
        second
    }

    /// Apply the user's reply to a teach request.
    pub fn resolve_teach(
        &mut self,
        request: &TeachRequest,
        reply: &str,
        knowledge: &mut KnowledgeBase,
    ) -> TeachOutcome {
        let reply = reply.trim();
        if reply.is_empty() || reply.eq_ignore_ascii_case(SKIP_KEYWORD) {
            return TeachOutcome::DeclineTeach;
        }
        let question = knowledge.learn(&request.utterance, reply);
        self.normalizer.learn_vocabulary(&question);
        info!(question = %question, "Learned new response");
        TeachOutcome::Learned { question }
    }

    /// Apply the user's choice (and, for `update`/`new`, the answer they typed)
    /// to a suggestion.
    pub fn resolve_suggestion(
        &mut self,
        suggestion: &Suggestion,
        choice: SuggestionChoice,
        answer: &str,
        knowledge: &mut KnowledgeBase,
    ) -> SuggestionOutcome {
        let answer = answer.trim();
        if answer.is_empty() {
            return SuggestionOutcome::DeclineSuggestion;
        }
        match choice {
            SuggestionChoice::Update => {
                knowledge.update_answer(&suggestion.question, answer);
                info!(question = %suggestion.question, "Updated stored answer");
                SuggestionOutcome::Updated {
                    question: suggestion.question.clone(),
                }
            }
            SuggestionChoice::New => {
                let question = knowledge.learn(&suggestion.utterance, answer);
                self.normalizer.learn_vocabulary(&question);
                info!(question = %question, "Registered new question");
                SuggestionOutcome::Registered { question }
            }
            SuggestionChoice::Decline => SuggestionOutcome::DeclineSuggestion,
        }
    }

    /// Close a non-follow-up turn: the next context comes from this turn's
    /// raw utterance alone.
    pub fn finish_turn(&self, utterance: &str) -> ConversationContext {
        self.tracker.update_context(utterance)
    }
}
