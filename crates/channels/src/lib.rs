//! Conversation channels for CogniBot.
//!
//! Each channel connects a session to whoever is typing. Channels are
//! trait-based ([`cognibot_core::Channel`]) and blocking.
//!
//! Available channels:
//! - **CLI**: interactive terminal chat (stdin/stdout)
//! - **Scripted**: replays a fixed list of user lines and records the replies

pub mod cli;
pub mod scripted;

pub use cli::CliChannel;
pub use scripted::ScriptedChannel;
