//! CogniBot CLI: the main entry point.
//!
//! Commands:
//! - `chat`      Interactive session (the default)
//! - `ask`       One read-only question
//! - `knowledge` Inspect the knowledge base
//! - `config`    Show, locate, or validate configuration
//! - `onboard`   Write a default config file
//! - `status`    Show resolved paths and thresholds

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cognibot",
    about = "CogniBot: a question-answering bot that learns from you",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of ~/.cognibot/config.toml
    #[arg(short, long, global = true, env = "COGNIBOT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Chat {
        /// Override the knowledge base file
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },

    /// Ask a single question without learning anything
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Override the knowledge base file
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },

    /// Inspect the knowledge base
    Knowledge {
        #[command(subcommand)]
        action: KnowledgeAction,

        /// Override the knowledge base file
        #[arg(short, long, global = true)]
        knowledge: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write a default configuration file
    Onboard,

    /// Show resolved paths and settings
    Status,
}

#[derive(Subcommand)]
enum KnowledgeAction {
    /// List every stored question with its answer
    List,
    /// Show counts and file details
    Stats,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Load and validate the config file
    Validate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the conversation.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Chat { knowledge: None }) {
        Commands::Chat { knowledge } => commands::chat::run(config, knowledge)?,
        Commands::Ask {
            question,
            knowledge,
        } => commands::ask::run(config, knowledge, &question.join(" "))?,
        Commands::Knowledge { action, knowledge } => match action {
            KnowledgeAction::List => commands::knowledge::list(config, knowledge)?,
            KnowledgeAction::Stats => commands::knowledge::stats(config, knowledge)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(config)?,
            ConfigAction::Path => commands::config_cmd::path(config)?,
            ConfigAction::Validate => commands::config_cmd::validate(config)?,
        },
        Commands::Onboard => commands::onboard::run(config)?,
        Commands::Status => commands::status::run(config)?,
    }

    Ok(())
}
