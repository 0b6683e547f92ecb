//! Contracts the core proxy logic is built against but never implements
//! itself. Mirrors the teacher's `broker_state.rs` split between "the
//! state a connection needs" and "who provides it" — except here the
//! providers are pluggable, so they are traits rather than a concrete
//! struct. Every method is total and side-effect-free from the core's
//! point of view: failures are reported through the return type, never
//! a panic, and each async method is expected to be wrapped in a
//! timeout by its caller rather than enforcing one internally.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::TcpStream;

/// Outcome of checking a username/password pair against whatever backs
/// local SASL PLAIN auth (a static table, a database, an IAM call).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Ok,
    Denied,
}

/// Verifies downstream SASL PLAIN credentials for the local auth gate
/// (spec §4.7). Implementations decide what "valid" means; the proxy
/// only needs the yes/no/error trichotomy.
#[async_trait]
pub trait PasswordAuthenticator: Send + Sync {
    async fn authenticate(&self, user: &str, pass: &str) -> anyhow::Result<AuthOutcome>;
}

/// A bearer token plus whatever the issuer wants attached to it. Opaque
/// to the proxy: it is only ever handed back to a `TokenInfo` for
/// verification, never inspected.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub token: String,
}

/// Mints tokens for the gateway-client handshake (spec §4.8a): the
/// proxy asks for a token for a given method name and attaches whatever
/// comes back to the upstream gateway-auth frame.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self, method: &str) -> anyhow::Result<TokenInfo>;
}

/// Verifies a token presented by a connecting client during the
/// gateway-server handshake (spec §4.8b).
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, method: &str, token: &str) -> anyhow::Result<AuthOutcome>;
}

/// Rewrites a single `(host, port)` pair found inside a Kafka response
/// (broker endpoint, coordinator endpoint, controller endpoint) to the
/// address clients should use to reach this proxy instead of the real
/// broker. Called once per address found; must be pure and fast since
/// [`crate::kafka_protocol::address_rewrite`] calls it inline while
/// walking a response buffer.
pub type AddressMapper = Arc<dyn Fn(&str, u16) -> (String, u16) + Send + Sync>;

/// A freshly accepted downstream connection paired with the broker
/// address it should be dialed against, as handed out by whatever sits
/// in front of the supervisor's accept loop. Kept deliberately thin —
/// everything else (TLS, forward proxy, auth) is layered on afterward
/// by [`crate::handler`].
pub struct Conn {
    pub broker_address: (String, u16),
    pub downstream_stream: TcpStream,
}

/// Produces [`Conn`] items for the supervisor's accept loop (spec §2's
/// "listener" component, §6's `Listener` contract). Out of scope for
/// the core proxy engine itself — routing a downstream connection to a
/// broker address is deployment-specific — but the supervisor needs
/// something to poll, so this trait is the seam a deployment plugs a
/// real router into.
#[async_trait]
pub trait Listener: Send + Sync {
    async fn accept(&self) -> std::io::Result<Conn>;
}

/// The simplest possible [`Listener`]: binds one TCP port and pairs
/// every accepted connection with the same, statically configured
/// broker address. Good enough to run the proxy end to end for a
/// single broker; a deployment fronting a fleet behind NAT supplies its
/// own `Listener` that inspects the client's SNI/destination instead.
pub struct StaticRouteListener {
    tcp_listener: tokio::net::TcpListener,
    broker_address: (String, u16),
}

impl StaticRouteListener {
    pub async fn bind(bind_address: &str, broker_address: (String, u16)) -> std::io::Result<Self> {
        let tcp_listener = tokio::net::TcpListener::bind(bind_address).await?;
        Ok(Self {
            tcp_listener,
            broker_address,
        })
    }
}

#[async_trait]
impl Listener for StaticRouteListener {
    async fn accept(&self) -> std::io::Result<Conn> {
        let (downstream_stream, _peer_addr) = self.tcp_listener.accept().await?;
        Ok(Conn {
            broker_address: self.broker_address.clone(),
            downstream_stream,
        })
    }
}
