//! `cognibot config`: configuration management commands.

use std::path::Path;

use cognibot_config::AppConfig;

use super::{CommandResult, config_path, load_config};

pub fn validate(config_flag: Option<&Path>) -> CommandResult {
    let path = config_path(config_flag);
    println!("Validating {}", path.display());

    match AppConfig::load_at(&path) {
        Ok(config) => {
            println!("  Config parsed successfully");

            let mut warnings = Vec::new();
            if !path.exists() {
                warnings.push("No config file found; defaults are in effect".to_string());
            }
            if config.matching.suggestion_threshold > config.matching.answer_threshold {
                warnings.push(
                    "suggestion_threshold is above answer_threshold; suggestions will only \
                     appear for answerless questions"
                        .to_string(),
                );
            }
            if let Some(dict) = &config.nlp.dictionary_path {
                if !dict.exists() {
                    warnings.push(format!("Dictionary file {} does not exist", dict.display()));
                }
            }

            if warnings.is_empty() {
                println!("  All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("  warning: {w}");
                }
            }

            println!();
            println!("  Knowledge:   {}", config.knowledge.path.display());
            println!(
                "  Thresholds:  viability {} / suggestion {} / answer {}",
                config.matching.viability_cutoff,
                config.matching.suggestion_threshold,
                config.matching.answer_threshold
            );
            println!("  Bot name:    {}", config.session.bot_name);
        }
        Err(e) => {
            println!("  Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show(config_flag: Option<&Path>) -> CommandResult {
    let config = load_config(config_flag)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path(config_flag: Option<&Path>) -> CommandResult {
    println!("{}", config_path(config_flag).display());
    Ok(())
}
