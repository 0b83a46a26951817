//! A channel that replays a transcript.

use std::collections::VecDeque;

use cognibot_core::Channel;
use cognibot_core::error::ChannelError;

/// Feeds fixed user lines to a session and records everything sent back.
/// Runs out like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    inputs: VecDeque<String>,
    sent: Vec<String>,
}

impl ScriptedChannel {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            sent: vec![],
        }
    }

    /// Every line sent so far, in order.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }

    /// User lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Channel for ScriptedChannel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn send(&mut self, content: &str) -> Result<(), ChannelError> {
        self.sent.push(content.to_string());
        Ok(())
    }

    fn receive(&mut self, _prompt: &str) -> Result<Option<String>, ChannelError> {
        Ok(self.inputs.pop_front())
    }
}
