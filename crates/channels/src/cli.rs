//! CLI channel: interactive terminal-based chat.
//!
//! Reads lines from stdin, writes to stdout. Used for `cognibot chat`. The
//! reader and writer are generic so the same code runs over in-memory buffers.

use std::io::{self, BufRead, Write};

use cognibot_core::Channel;
use cognibot_core::error::ChannelError;
use tracing::debug;

/// Interactive line-oriented channel.
pub struct CliChannel<R, W> {
    input: R,
    output: W,
}

impl CliChannel<io::StdinLock<'static>, io::Stdout> {
    /// A channel over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliChannel<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_failed(e: io::Error) -> ChannelError {
        ChannelError::WriteFailed {
            channel: "cli".into(),
            reason: e.to_string(),
        }
    }
}

impl<R: BufRead, W: Write> Channel for CliChannel<R, W> {
    fn name(&self) -> &str {
        "cli"
    }

    fn send(&mut self, content: &str) -> Result<(), ChannelError> {
        writeln!(self.output, "{content}").map_err(Self::write_failed)?;
        self.output.flush().map_err(Self::write_failed)
    }

    fn receive(&mut self, prompt: &str) -> Result<Option<String>, ChannelError> {
        write!(self.output, "{prompt}").map_err(Self::write_failed)?;
        self.output.flush().map_err(Self::write_failed)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ChannelError::ReadFailed {
                channel: "cli".into(),
                reason: e.to_string(),
            })?;

        if read == 0 {
            debug!("End of input on cli channel");
            return Ok(None); // EOF (Ctrl+D)
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn cli_channel_properties() {
        let ch = CliChannel::new(Cursor::new(""), Vec::new());
        assert_eq!(ch.name(), "cli");
    }

    #[test]
    fn reads_lines_until_eof() {
        let mut ch = CliChannel::new(Cursor::new("hello\r\nworld\n"), Vec::new());
        assert_eq!(ch.receive("You: ").unwrap().as_deref(), Some("hello"));
        assert_eq!(ch.receive("You: ").unwrap().as_deref(), Some("world"));
        assert_eq!(ch.receive("You: ").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut ch = CliChannel::new(Cursor::new("quit"), Vec::new());
        assert_eq!(ch.receive("> ").unwrap().as_deref(), Some("quit"));
    }

    #[test]
    fn prompts_and_replies_go_to_output() {
        let mut ch = CliChannel::new(Cursor::new("hi\n"), Vec::new());
        ch.receive("You: ").unwrap();
        ch.send("CogniBot: hello").unwrap();
        let out = String::from_utf8(ch.into_output()).unwrap();
        assert_eq!(out, "You: CogniBot: hello\n");
    }
}
