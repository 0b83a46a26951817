//! `cognibot status`: show resolved paths and settings.

use std::path::Path;

use cognibot_core::KnowledgeStore;
use cognibot_knowledge::JsonFileStore;

use super::{CommandResult, config_path, load_config};

pub fn run(config_flag: Option<&Path>) -> CommandResult {
    let config = load_config(config_flag)?;
    let store = JsonFileStore::new(&config.knowledge.path);
    let kb = store.load();

    println!("CogniBot Status");
    println!("===============");
    println!("  Config file:  {}", config_path(config_flag).display());
    println!("  Knowledge:    {} ({} questions)", store.path().display(), kb.len());
    println!("  Bot name:     {}", config.session.bot_name);
    println!("  Exit with:    {}", config.session.exit_commands.join(", "));
    println!(
        "  Thresholds:   viability {} / suggestion {} / answer {}",
        config.matching.viability_cutoff,
        config.matching.suggestion_threshold,
        config.matching.answer_threshold
    );
    println!(
        "  Spelling:     {}",
        if config.nlp.spell_correction {
            format!("on (max distance {})", config.nlp.max_edit_distance)
        } else {
            "off".to_string()
        }
    );
    if let Some(dict) = &config.nlp.dictionary_path {
        println!("  Dictionary:   {}", dict.display());
    }
    if !config.nlp.extra_stopwords.is_empty() {
        println!("  Stopwords:    +{}", config.nlp.extra_stopwords.len());
    }

    if config_path(config_flag).exists() {
        println!("\n  Config file found");
    } else {
        println!("\n  No config file; run `cognibot onboard` first");
    }

    Ok(())
}
