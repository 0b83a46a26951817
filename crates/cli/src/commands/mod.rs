//! Command implementations plus the wiring they share: config resolution and
//! engine assembly.

pub mod ask;
pub mod chat;
pub mod config_cmd;
pub mod knowledge;
pub mod onboard;
pub mod status;

use std::path::{Path, PathBuf};

use cognibot_config::AppConfig;
use cognibot_core::{KnowledgeBase, NoCorrection, SpellCorrector};
use cognibot_engine::{ContextTracker, MatchingEngine, SessionOptions};
use cognibot_nlp::{DictionaryCorrector, HeuristicTagger, Stopwords, TextNormalizer};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// The `--config` file if given, otherwise `~/.cognibot/config.toml`.
pub fn config_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path)
}

pub fn load_config(flag: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load_at(&config_path(flag))
        .map_err(|e| format!("Failed to load config: {e}"))?;
    Ok(config)
}

/// `--knowledge` beats the environment and the config file.
pub fn knowledge_path(config: &AppConfig, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config.knowledge.path.clone())
}

/// Assemble the matching engine described by `config`.
///
/// The spelling dictionary also learns every word of the stored questions so
/// taught vocabulary is not corrected away.
pub fn build_engine(
    config: &AppConfig,
    knowledge: &KnowledgeBase,
) -> Result<MatchingEngine, Box<dyn std::error::Error>> {
    let corrector: Box<dyn SpellCorrector> = if config.nlp.spell_correction {
        let mut dictionary = DictionaryCorrector::english(config.nlp.max_edit_distance);
        if let Some(path) = &config.nlp.dictionary_path {
            dictionary.add_file(path)?;
        }
        for question in knowledge.questions() {
            dictionary.add_text(question);
        }
        tracing::debug!(words = dictionary.len(), "Spelling dictionary ready");
        Box::new(dictionary)
    } else {
        Box::new(NoCorrection)
    };

    let stopwords = Stopwords::with_extra(&config.nlp.extra_stopwords);

    Ok(MatchingEngine::new(
        TextNormalizer::new(corrector, stopwords),
        ContextTracker::new(Box::new(HeuristicTagger::new())),
        config.matching,
    ))
}

pub fn session_options(config: &AppConfig) -> SessionOptions {
    SessionOptions {
        bot_name: config.session.bot_name.clone(),
        exit_commands: config.session.exit_commands.clone(),
    }
}
