//! `cognibot chat`: the interactive session.

use std::path::{Path, PathBuf};

use cognibot_channels::CliChannel;
use cognibot_core::KnowledgeStore;
use cognibot_engine::Session;
use cognibot_knowledge::JsonFileStore;

use super::{CommandResult, build_engine, knowledge_path, load_config, session_options};

pub fn run(config_flag: Option<&Path>, knowledge: Option<PathBuf>) -> CommandResult {
    let config = load_config(config_flag)?;
    let store = JsonFileStore::new(knowledge_path(&config, knowledge));
    let engine = build_engine(&config, &store.load())?;

    let bot_name = config.session.bot_name.clone();
    let exit_hint = config.session.exit_commands.join("' or '");

    println!();
    println!("  {bot_name}: Hello! Ask me anything.");
    println!("  Knowledge: {}", store.path().display());
    println!("  Type '{exit_hint}' to leave.");
    println!();

    let mut session = Session::new(engine, store, session_options(&config));
    let mut channel = CliChannel::stdio();
    let summary = session.run(&mut channel)?;

    println!();
    println!(
        "  {bot_name}: Goodbye! ({} questions, {} learned, {} updated)",
        summary.turns, summary.learned, summary.updated
    );
    if summary.failed_saves > 0 {
        eprintln!(
            "  {} change(s) could not be saved to {}",
            summary.failed_saves,
            session.store().path().display()
        );
    }
    println!();

    Ok(())
}
