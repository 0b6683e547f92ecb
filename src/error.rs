//! Error taxonomy for the proxy core.
//!
//! Mirrors the shape of [`crate::kafka_protocol::kafka_error::KafkaBrokerError`]
//! (one `thiserror` enum, one variant per failure family) but at the level of
//! a whole connection rather than a single frame. See spec §7 for the policy
//! behind each variant: everything here is per-connection unless noted.

use thiserror::Error;

/// Every failure family a connection (or, for `Config`, the process) can hit.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Fatal at startup: invalid scheme, missing TLS config when required, etc.
    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream broker unreachable or the dial timed out.
    #[error("dial error: {0}")]
    Dial(#[source] std::io::Error),

    /// TLS handshake failed, either upstream or while decorating the dialer chain.
    #[error("tls error: {0}")]
    Tls(String),

    /// SOCKS5/HTTP CONNECT forward-proxy handshake failed.
    #[error("forward proxy error: {0}")]
    ForwardProxy(String),

    /// SASL or gateway authentication failed (local or upstream, client or server side).
    #[error("auth error: {0}")]
    Auth(String),

    /// Malformed Kafka frame, unknown correlation id, duplicate correlation id, oversize frame.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Request carried an api_key present in the forbidden set.
    #[error("forbidden api_key {0}")]
    ForbiddenApiKey(i16),

    /// Plain I/O failure: EOF, reset, broken pipe. Closed quietly, logged at debug.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A handler task panicked; caught by the supervisor, connection torn down.
    #[error("handler panicked: {0}")]
    Panic(String),
}

impl ProxyError {
    /// True for failures that should be logged loudly (vs quiet EOF/reset closes).
    pub fn is_noisy(&self) -> bool {
        !matches!(self, ProxyError::Io(_))
    }
}

pub type ProxyResult<T> = std::result::Result<T, ProxyError>;

impl From<crate::kafka_protocol::KafkaBrokerError> for ProxyError {
    fn from(err: crate::kafka_protocol::KafkaBrokerError) -> Self {
        ProxyError::Protocol(err.to_string())
    }
}
