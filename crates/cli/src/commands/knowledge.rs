//! `cognibot knowledge`: inspect the stored questions and answers.

use std::path::{Path, PathBuf};

use cognibot_core::KnowledgeStore;
use cognibot_knowledge::JsonFileStore;

use super::{CommandResult, knowledge_path, load_config};

pub fn list(config_flag: Option<&Path>, knowledge: Option<PathBuf>) -> CommandResult {
    let config = load_config(config_flag)?;
    let store = JsonFileStore::new(knowledge_path(&config, knowledge));
    let kb = store.load();

    if kb.is_empty() {
        println!("No questions learned yet ({}).", store.path().display());
        return Ok(());
    }

    for (i, question) in kb.distinct_questions().into_iter().enumerate() {
        let answer = kb.answer_for(question).unwrap_or("(no answer)");
        println!("  {:>3}. {question}", i + 1);
        println!("       -> {answer}");
    }

    Ok(())
}

pub fn stats(config_flag: Option<&Path>, knowledge: Option<PathBuf>) -> CommandResult {
    let config = load_config(config_flag)?;
    let store = JsonFileStore::new(knowledge_path(&config, knowledge));
    let kb = store.load();

    let distinct = kb.distinct_questions().len();
    let unanswered = kb
        .distinct_questions()
        .into_iter()
        .filter(|q| kb.answer_for(q).is_none())
        .count();

    println!("Knowledge Base");
    println!("==============");
    println!("  File:        {}", store.path().display());
    match std::fs::metadata(store.path()) {
        Ok(meta) => println!("  Size:        {:.1} KB", meta.len() as f64 / 1024.0),
        Err(_) => println!("  Size:        (not created yet)"),
    }
    println!("  Questions:   {} ({distinct} distinct)", kb.len());
    println!("  Answers:     {}", kb.answers.len());
    if unanswered > 0 {
        println!("  Unanswered:  {unanswered}");
    }

    Ok(())
}
