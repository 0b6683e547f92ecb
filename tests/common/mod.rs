//! Shared scaffolding for the integration tests: a loopback "downstream
//! client <-> accepted connection" pair and a loopback "fake broker"
//! listener, since [`kafka_proxy_rs::collaborators::Conn`] and the
//! dialer chain both work in terms of real `TcpStream`s rather than
//! in-memory pipes.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{TcpListener, TcpStream};

use kafka_proxy_rs::collaborators::{AuthOutcome, PasswordAuthenticator, TokenInfo, TokenProvider, TokenVerifier};
use kafka_proxy_rs::config::HandlerConfig;
use kafka_proxy_rs::dialer::DialerStep;
use kafka_proxy_rs::handler::HandlerCollaborators;
use kafka_proxy_rs::metrics::NoopMetrics;
use kafka_proxy_rs::tcp_options::TcpConnOptions;

/// Binds an ephemeral loopback listener, connects a client to it, and
/// returns `(client_side, server_side)` — the latter standing in for
/// what a real downstream listener would hand the supervisor.
pub async fn downstream_pair() -> (TcpStream, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = TcpStream::connect(addr).await.unwrap();
    let (server, _) = listener.accept().await.unwrap();
    (client, server)
}

/// Binds an ephemeral loopback listener to stand in for a broker; the
/// caller drives the accepted connection with whatever broker-side
/// script the test needs.
pub async fn fake_broker() -> (SocketAddr, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (addr, listener)
}

/// A minimal [`HandlerConfig`] with every optional auth layer disabled
/// and generous buffers, for tests that only care about plain
/// passthrough/rewrite/forbidden-key behavior.
pub fn base_handler_config() -> HandlerConfig {
    HandlerConfig {
        max_open_requests: 16,
        request_buf_size: 64 * 1024,
        response_buf_size: 64 * 1024,
        forbidden_api_keys: Default::default(),
        tcp_options: Some(TcpConnOptions {
            keep_alive: Duration::from_secs(30),
            read_buffer_size: 64 * 1024,
            write_buffer_size: 64 * 1024,
        }),
        sasl_client: None,
        gateway_client: None,
        gateway_server: None,
        local_sasl: None,
    }
}

struct DenyAll;
#[async_trait]
impl PasswordAuthenticator for DenyAll {
    async fn authenticate(&self, _user: &str, _pass: &str) -> anyhow::Result<AuthOutcome> {
        Ok(AuthOutcome::Denied)
    }
}
#[async_trait]
impl TokenProvider for DenyAll {
    async fn get_token(&self, _method: &str) -> anyhow::Result<TokenInfo> {
        Err(anyhow::anyhow!("no token provider configured in this test"))
    }
}
#[async_trait]
impl TokenVerifier for DenyAll {
    async fn verify_token(&self, _method: &str, _token: &str) -> anyhow::Result<AuthOutcome> {
        Ok(AuthOutcome::Denied)
    }
}

/// Collaborators with an identity address mapper and deny-everything
/// auth plugins, for tests that don't exercise a specific auth layer.
pub fn identity_collaborators() -> HandlerCollaborators {
    HandlerCollaborators {
        password_authenticator: Arc::new(DenyAll),
        token_provider: Arc::new(DenyAll),
        token_verifier: Arc::new(DenyAll),
        address_mapper: Arc::new(|host: &str, port: u16| (host.to_string(), port)),
        metrics: Arc::new(NoopMetrics),
    }
}

pub fn direct_dialer(dial_timeout: Duration) -> DialerStep {
    DialerStep::build(dial_timeout, None, None).unwrap()
}
