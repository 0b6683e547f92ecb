//! Entry point: loads configuration, builds the dialer chain and
//! collaborator wiring, and runs the supervisor until Ctrl+C. Mirrors
//! the teacher's `setup`/`run_server`/`main` split in shape; the actual
//! per-connection work moved into [`kafka_proxy_rs::handler`] and
//! [`kafka_proxy_rs::supervisor`].

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use kafka_proxy_rs::collaborators::{AuthOutcome, PasswordAuthenticator, StaticRouteListener, TokenInfo, TokenProvider, TokenVerifier};
use kafka_proxy_rs::config::{Config, HandlerConfig};
use kafka_proxy_rs::dialer::DialerStep;
use kafka_proxy_rs::handler::HandlerCollaborators;
use kafka_proxy_rs::metrics::NoopMetrics;
use kafka_proxy_rs::registry::ConnSet;

/// Stand-in for the password-verification plugin process spec §1 treats
/// as an external collaborator. Denies everything and logs loudly so a
/// deployment notices immediately if it forgot to wire in a real
/// [`PasswordAuthenticator`].
struct DenyAllAuthenticator;

#[async_trait]
impl PasswordAuthenticator for DenyAllAuthenticator {
    async fn authenticate(&self, user: &str, _pass: &str) -> anyhow::Result<AuthOutcome> {
        tracing::warn!(user, "no PasswordAuthenticator configured; denying local SASL login");
        Ok(AuthOutcome::Denied)
    }
}

/// Stand-in for the token-issuance plugin process. Fails outright: a
/// deployment with `auth.gateway.client.enable = true` must supply a
/// real [`TokenProvider`] before this default is acceptable.
struct UnconfiguredTokenProvider;

#[async_trait]
impl TokenProvider for UnconfiguredTokenProvider {
    async fn get_token(&self, method: &str) -> anyhow::Result<TokenInfo> {
        Err(anyhow::anyhow!("no TokenProvider configured for method '{method}'"))
    }
}

/// Stand-in for the token-verification plugin process; denies
/// everything, matching [`DenyAllAuthenticator`]'s fail-closed policy.
struct DenyAllTokenVerifier;

#[async_trait]
impl TokenVerifier for DenyAllTokenVerifier {
    async fn verify_token(&self, method: &str, _token: &str) -> anyhow::Result<AuthOutcome> {
        tracing::warn!(method, "no TokenVerifier configured; denying gateway-server login");
        Ok(AuthOutcome::Denied)
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    info!("starting kafka-proxy-rs");
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let dialer = Arc::new(
        DialerStep::build(
            config.dial_timeout,
            config.tls_enable.then(kafka_proxy_rs::dialer::TlsDialConfig::with_webpki_roots),
            config.forward_proxy_spec(),
        )
        .context("failed to build dialer chain")?,
    );

    let listen_address = format!("{}:{}", config.listen_host, config.listen_port);
    let listener = Arc::new(
        StaticRouteListener::bind(&listen_address, config.broker_address.clone())
            .await
            .with_context(|| format!("failed to bind listener on {listen_address}"))?,
    );
    info!("kafka-proxy-rs listening on {listen_address}");

    let handler_config = Arc::new(HandlerConfig::from(&config));
    let collaborators = Arc::new(HandlerCollaborators {
        password_authenticator: Arc::new(DenyAllAuthenticator),
        token_provider: Arc::new(UnconfiguredTokenProvider),
        token_verifier: Arc::new(DenyAllTokenVerifier),
        address_mapper: Arc::new(|host: &str, port: u16| (host.to_string(), port)),
        metrics: Arc::new(NoopMetrics),
    });
    let conn_set = ConnSet::new();

    let shutdown_token = CancellationToken::new();
    let shutdown_token_clone = shutdown_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
        }
        info!("SIGINT received, triggering shutdown");
        shutdown_token_clone.cancel();
    });

    kafka_proxy_rs::supervisor::run(
        listener,
        dialer,
        handler_config,
        collaborators,
        conn_set,
        shutdown_token,
        config.client_drain_timeout_secs,
    )
    .await;

    info!("kafka-proxy-rs has shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::load()?;

    run_server(config).await
}
