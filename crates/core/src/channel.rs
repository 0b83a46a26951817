//! Channel trait: the abstraction over the conversation surface.
//!
//! A Channel connects the engine to whoever is typing: the terminal in normal
//! use, a scripted transcript in tests. It is strictly request/response and
//! blocking: the session waits on `receive` for the next line.

use crate::error::ChannelError;

/// The core Channel trait.
pub trait Channel {
    /// Channel name (e.g., "cli", "scripted").
    fn name(&self) -> &str;

    /// Show a line of bot output.
    fn send(&mut self, content: &str) -> Result<(), ChannelError>;

    /// Show `prompt` and block for the next line of user input.
    ///
    /// Returns `Ok(None)` at end of input.
    fn receive(&mut self, prompt: &str) -> Result<Option<String>, ChannelError>;
}
