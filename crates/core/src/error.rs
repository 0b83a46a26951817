//! Error types for the CogniBot domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all CogniBot operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Knowledge store errors ---
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    // --- Channel errors ---
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to encode knowledge base: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Failed to read from {channel}: {reason}")]
    ReadFailed { channel: String, reason: String },

    #[error("Failed to write to {channel}: {reason}")]
    WriteFailed { channel: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_error_displays_correctly() {
        let err = Error::Knowledge(KnowledgeError::Storage("disk full".into()));
        assert!(err.to_string().contains("Knowledge error"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn bounded_errors_convert_into_top_level() {
        fn fails() -> Result<()> {
            Err(ChannelError::ReadFailed {
                channel: "stdin".into(),
                reason: "eof".into(),
            })?
        }
        assert!(matches!(fails(), Err(Error::Channel(ChannelError::ReadFailed { .. }))));
    }

    #[test]
    fn channel_error_displays_correctly() {
        let err = Error::Channel(ChannelError::WriteFailed {
            channel: "cli".into(),
            reason: "broken pipe".into(),
        });
        assert!(err.to_string().contains("cli"));
        assert!(err.to_string().contains("broken pipe"));
    }
}
