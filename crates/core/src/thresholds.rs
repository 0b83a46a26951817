//! Confidence thresholds for the matching engine.
//!
//! These three numbers are the whole precision/recall tradeoff of the bot, so
//! they live in one place and can be overridden from configuration.

use serde::{Deserialize, Serialize};

/// Minimum ratio for a stored question to count as a candidate at all.
pub const VIABILITY_CUTOFF: f64 = 0.3;

/// A rejected question scoring strictly above this is offered as "did you mean".
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

/// A candidate scoring strictly above this is answered directly.
pub const ANSWER_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_viability_cutoff")]
    pub viability_cutoff: f64,

    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,

    #[serde(default = "default_answer_threshold")]
    pub answer_threshold: f64,
}

fn default_viability_cutoff() -> f64 {
    VIABILITY_CUTOFF
}
fn default_suggestion_threshold() -> f64 {
    SUGGESTION_THRESHOLD
}
fn default_answer_threshold() -> f64 {
    ANSWER_THRESHOLD
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            viability_cutoff: VIABILITY_CUTOFF,
            suggestion_threshold: SUGGESTION_THRESHOLD,
            answer_threshold: ANSWER_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Check that every threshold is a ratio and the cutoffs are ordered.
    pub fn check(&self) -> Result<(), String> {
        for (name, value) in [
            ("viability_cutoff", self.viability_cutoff),
            ("suggestion_threshold", self.suggestion_threshold),
            ("answer_threshold", self.answer_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0.0 and 1.0 (got {value})"));
            }
        }
        if self.viability_cutoff > self.answer_threshold {
            return Err("viability_cutoff must not exceed answer_threshold".into());
        }
        Ok(())
    }
}
