//! One interactive session: the turn loop around the matching engine.
//!
//! The session owns the loaded knowledge base and its store, talks to the user
//! through a [`Channel`], and threads the [`ConversationContext`] from turn to
//! turn by value. Every mutation is saved before the turn ends.

use cognibot_core::{Channel, ConversationContext, KnowledgeBase, KnowledgeStore, Result};
use tracing::{debug, error, info};

use crate::matcher::{
    Decision, MatchingEngine, Suggestion, SuggestionChoice, SuggestionOutcome, TeachOutcome,
    TeachRequest,
};

const USER_PROMPT: &str = "You: ";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Printed before every bot line
    pub bot_name: String,
    /// Case-insensitive commands that end the session
    pub exit_commands: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            bot_name: "CogniBot".into(),
            exit_commands: vec!["quit".into(), "exit".into()],
        }
    }
}

/// What a single turn ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The user asked to leave
    Exit,
    /// Blank input, nothing to do
    Empty,
    FollowUp,
    Answered,
    Suggestion(SuggestionOutcome),
    Teach(TeachOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub outcome: TurnOutcome,
    /// The context to hand to the next turn
    pub context: ConversationContext,
}

/// Counters for a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns: usize,
    pub answered: usize,
    pub learned: usize,
    pub updated: usize,
    pub follow_ups: usize,
    pub failed_saves: usize,
}

pub struct Session<S: KnowledgeStore> {
    engine: MatchingEngine,
    store: S,
    knowledge: KnowledgeBase,
    options: SessionOptions,
    summary: SessionSummary,
}

impl<S: KnowledgeStore> Session<S> {
    /// Start a session, loading the knowledge base from `store`.
    pub fn new(engine: MatchingEngine, store: S, options: SessionOptions) -> Self {
        let knowledge = store.load();
        debug!(store = store.name(), questions = knowledge.len(), "Session started");
        Self {
            engine,
            store,
            knowledge,
            options,
            summary: SessionSummary::default(),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    pub fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim();
        self.options
            .exit_commands
            .iter()
            .any(|c| c.eq_ignore_ascii_case(input))
    }

    /// Read utterances until an exit command or end of input.
    pub fn run(&mut self, channel: &mut dyn Channel) -> Result<SessionSummary> {
        let mut context = ConversationContext::empty();

        while let Some(line) = channel.receive(USER_PROMPT)? {
            let turn = self.turn(&line, context, channel)?;
            if turn.outcome == TurnOutcome::Exit {
                break;
            }
            context = turn.context;
        }

        info!(
            turns = self.summary.turns,
            learned = self.summary.learned,
            updated = self.summary.updated,
            "Session ended"
        );
        Ok(self.summary.clone())
    }

    /// Handle one utterance, including any follow-up questions the engine
    /// needs to ask, and return the context for the next turn.
    pub fn turn(
        &mut self,
        utterance: &str,
        context: ConversationContext,
        channel: &mut dyn Channel,
    ) -> Result<Turn> {
        let utterance = utterance.trim();
        if self.is_exit_command(utterance) {
            return Ok(Turn {
                outcome: TurnOutcome::Exit,
                context,
            });
        }
        if utterance.is_empty() {
            return Ok(Turn {
                outcome: TurnOutcome::Empty,
                context,
            });
        }
        self.summary.turns += 1;

        let outcome = match self.engine.decide(utterance, &context, &self.knowledge) {
            Decision::FollowUp { subject } => {
                self.say(channel, &format!("I'm not sure about {subject}'s current location."))?;
                self.summary.follow_ups += 1;
                // Follow-ups keep the subject pinned.
                return Ok(Turn {
                    outcome: TurnOutcome::FollowUp,
                    context,
                });
            }
            Decision::Answer { answer, .. } => {
                self.say(channel, &answer)?;
                self.summary.answered += 1;
                TurnOutcome::Answered
            }
            Decision::Suggest(suggestion) => {
                TurnOutcome::Suggestion(self.suggest(&suggestion, channel)?)
            }
            Decision::Teach(request) => TurnOutcome::Teach(self.teach(&request, channel)?),
        };

        Ok(Turn {
            outcome,
            context: self.engine.finish_turn(utterance),
        })
    }

    fn teach(&mut self, request: &TeachRequest, channel: &mut dyn Channel) -> Result<TeachOutcome> {
        self.say(
            channel,
            &format!(
                "I don't know the answer to '{}'. Can you teach me? if not type skip",
                request.utterance
            ),
        )?;
        let reply = channel.receive(USER_PROMPT)?.unwrap_or_default();

        let outcome = self
            .engine
            .resolve_teach(request, &reply, &mut self.knowledge);
        match outcome {
            TeachOutcome::Learned { .. } => {
                if self.persist(channel)? {
                    self.summary.learned += 1;
                    self.say(channel, "Thank you! I learned a new response.")?;
                }
            }
            TeachOutcome::DeclineTeach => {
                self.say(channel, "Okay! Let me know if you have other questions.")?;
            }
        }
        Ok(outcome)
    }

    fn suggest(
        &mut self,
        suggestion: &Suggestion,
        channel: &mut dyn Channel,
    ) -> Result<SuggestionOutcome> {
        let current = suggestion
            .answer
            .as_deref()
            .unwrap_or("(no answer stored)");
        self.say(
            channel,
            &format!(
                "I'm not sure. Did you mean '{}'? My answer to that is: {current}",
                suggestion.question
            ),
        )?;
        self.say(
            channel,
            "Type 'update' to replace that answer, 'new' to teach me your question separately, or 'skip'.",
        )?;

        let choice = SuggestionChoice::parse(&channel.receive(USER_PROMPT)?.unwrap_or_default());
        let answer = match choice {
            SuggestionChoice::Decline => String::new(),
            SuggestionChoice::Update | SuggestionChoice::New => {
                self.say(channel, "What should the answer be?")?;
                channel.receive(USER_PROMPT)?.unwrap_or_default()
            }
        };

        let outcome = self
            .engine
            .resolve_suggestion(suggestion, choice, &answer, &mut self.knowledge);
        match &outcome {
            SuggestionOutcome::Updated { .. } => {
                if self.persist(channel)? {
                    self.summary.updated += 1;
                    self.say(channel, "Thank you! I updated my answer.")?;
                }
            }
            SuggestionOutcome::Registered { .. } => {
                if self.persist(channel)? {
                    self.summary.learned += 1;
                    self.say(channel, "Thank you! I learned a new response.")?;
                }
            }
            SuggestionOutcome::DeclineSuggestion => {
                self.say(channel, "Okay! Let me know if you have other questions.")?;
            }
        }
        Ok(outcome)
    }

    /// Save the knowledge base. A failed save is reported to the user and the
    /// session carries on with the in-memory change.
    fn persist(&mut self, channel: &mut dyn Channel) -> Result<bool> {
        match self.store.save(&self.knowledge) {
            Ok(()) => Ok(true),
            Err(e) => {
                error!(store = self.store.name(), error = %e, "Failed to save knowledge base");
                self.summary.failed_saves += 1;
                self.say(channel, &format!("Sorry, I couldn't save that: {e}"))?;
                Ok(false)
            }
        }
    }

    fn say(&self, channel: &mut dyn Channel, message: &str) -> Result<()> {
        channel.send(&format!("{}: {message}", self.options.bot_name))?;
        Ok(())
    }
}
