//! `cognibot ask`: one read-only decision.

use std::path::{Path, PathBuf};

use cognibot_core::{ConversationContext, KnowledgeStore};
use cognibot_engine::Decision;
use cognibot_knowledge::JsonFileStore;

use super::{CommandResult, build_engine, knowledge_path, load_config};

pub fn run(config_flag: Option<&Path>, knowledge: Option<PathBuf>, question: &str) -> CommandResult {
    let config = load_config(config_flag)?;
    let store = JsonFileStore::new(knowledge_path(&config, knowledge));
    let kb = store.load();
    let engine = build_engine(&config, &kb)?;

    let bot_name = &config.session.bot_name;
    match engine.decide(question, &ConversationContext::empty(), &kb) {
        Decision::Answer { answer, .. } => println!("{bot_name}: {answer}"),
        Decision::Suggest(s) => {
            println!(
                "{bot_name}: I'm not sure. Did you mean '{}' ({:.0}% similar)?",
                s.question,
                s.confidence * 100.0
            );
            if let Some(answer) = s.answer {
                println!("{bot_name}: My answer to that is: {answer}");
            }
        }
        Decision::Teach(_) | Decision::FollowUp { .. } => {
            println!("{bot_name}: unknown. Teach me with `cognibot chat`.");
        }
    }

    Ok(())
}
