use std::io;
use thiserror::Error;

/// A specialized `Result` type for Kafka frame-parsing operations.
pub type KafkaResult<T> = std::result::Result<T, KafkaBrokerError>;

/// Errors that can occur while parsing or rewriting a Kafka frame.
#[derive(Error, Debug)]
pub enum KafkaBrokerError {
    /// The frame is malformed or otherwise invalid. Carries the Kafka
    /// error code this proxy would have replied with if it originated
    /// responses for this API, for use in SASL/gateway handshake replies.
    #[error("Invalid request: {reason}")]
    MalformedRequest {
        /// The Kafka error code associated with this failure.
        code: i16,
        /// A human-readable description of what went wrong.
        reason: String,
    },

    /// Wrapping an I/O error (such as from the socket), so we can unify
    /// `io::Error` under this custom type.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// If you ever want to wrap `anyhow::Error` explicitly, you can do so.
    /// But often you'll convert directly into more specific errors instead.
    #[error("Unhandled error: {0}")]
    Other(#[from] anyhow::Error),
}
