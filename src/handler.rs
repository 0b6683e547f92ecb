//! Per-connection handler (spec §4.9): runs the fixed order of
//! operations from dial through teardown for a single accepted
//! connection. Generalizes the teacher's `client_handler.rs`
//! request/response loop into the full auth-then-pump pipeline this
//! proxy needs.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{split, AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

use crate::auth::{gateway_client, gateway_server, local_sasl_server, sasl_client};
use crate::collaborators::{AddressMapper, Conn, PasswordAuthenticator, TokenProvider, TokenVerifier};
use crate::config::HandlerConfig;
use crate::correlation::CorrelationTable;
use crate::dialer::DialerStep;
use crate::error::{ProxyError, ProxyResult};
use crate::metrics::ProxyMetrics;
use crate::pumps::{self, PumpConfig};
use crate::registry::ConnSet;
use crate::tcp_options;

/// Every injected collaborator a handler needs across its lifetime.
/// Bundled so the supervisor only threads one `Arc` per connection
/// instead of five.
pub struct HandlerCollaborators {
    pub password_authenticator: Arc<dyn PasswordAuthenticator>,
    pub token_provider: Arc<dyn TokenProvider>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub address_mapper: AddressMapper,
    pub metrics: Arc<dyn ProxyMetrics>,
}

/// Runs a single connection end to end: dial, handshakes, pumps,
/// teardown. Any failure at any step closes both sides; the caller
/// (the supervisor) is only told whether it happened and why, for
/// logging — it never needs to react differently per error kind.
#[instrument(skip_all, fields(broker = %conn.broker_address.0, port = conn.broker_address.1))]
pub async fn handle_connection(
    conn: Conn,
    dialer: Arc<DialerStep>,
    config: Arc<HandlerConfig>,
    collaborators: Arc<HandlerCollaborators>,
    conn_set: Arc<ConnSet>,
) -> ProxyResult<()> {
    let peer_addr = conn
        .downstream_stream
        .peer_addr()
        .unwrap_or_else(|_| "0.0.0.0:0".parse().unwrap());
    let broker_address = conn.broker_address.clone();
    let mut downstream = conn.downstream_stream;

    // 1. Dial upstream via the dialer chain.
    let mut upstream = dialer
        .dial((broker_address.0.as_str(), broker_address.1))
        .await?;

    // 2. Deadlines are cleared by construction: the dialer's own timeout
    // bounds the connect, nothing further is armed until a handshake
    // below arms its own.

    // 3. Gateway-client auth, if enabled.
    if let Some(gateway_client_config) = &config.gateway_client {
        gateway_client::run(&mut upstream, gateway_client_config, collaborators.token_provider.as_ref()).await?;
    }

    // 4. SASL PLAIN client, if enabled.
    if let Some(sasl_client_config) = &config.sasl_client {
        sasl_client::run(&mut upstream, sasl_client_config).await?;
    }

    // 5. TCP options, best-effort when the upstream stream is wrapped.
    if let Some(tcp_options) = &config.tcp_options {
        match upstream.as_any().downcast_ref::<TcpStream>() {
            Some(tcp_stream) => {
                if let Err(e) = tcp_options::apply_to_tcp_stream(tcp_stream, tcp_options) {
                    warn!(error = %e, "failed to apply TCP options to upstream socket");
                }
            }
            None => tcp_options::warn_unreachable(),
        }
    }

    // 6. Gateway-server auth, downstream side.
    if let Some(gateway_server_config) = &config.gateway_server {
        gateway_server::run(&mut downstream, gateway_server_config, collaborators.token_verifier.as_ref()).await?;
    }

    // 7. Local SASL PLAIN server, downstream side.
    if let Some(local_sasl_config) = &config.local_sasl {
        local_sasl_server::run(&mut downstream, local_sasl_config, collaborators.password_authenticator.as_ref())
            .await?;
    }

    // 8. Register in the connection set.
    let handle = conn_set.register(peer_addr, broker_address.clone());
    collaborators.metrics.connection_opened();

    // 9. Run the pumps until either finishes or errors.
    let pump_result = run_pumps(&mut downstream, &mut upstream, &config, &collaborators, &handle.close_token()).await;

    // 10. Deregister; streams close as `downstream`/`upstream` drop.
    conn_set.deregister(&handle);
    collaborators.metrics.connection_closed();

    if let Err(e) = &pump_result {
        if e.is_noisy() {
            warn!(error = %e, "connection closed with error");
        } else {
            info!("connection closed");
        }
    }
    pump_result
}

async fn run_pumps<D, U>(
    downstream: &mut D,
    upstream: &mut U,
    config: &HandlerConfig,
    collaborators: &HandlerCollaborators,
    close: &tokio_util::sync::CancellationToken,
) -> ProxyResult<()>
where
    D: AsyncRead + AsyncWrite + Unpin,
    U: AsyncRead + AsyncWrite + Unpin,
{
    let table = CorrelationTable::new(config.max_open_requests);
    let pump_config = PumpConfig {
        request_buf_size: config.request_buf_size,
        response_buf_size: config.response_buf_size,
        forbidden_api_keys: config.forbidden_api_keys.clone(),
    };

    let (mut downstream_read, mut downstream_write) = split(downstream);
    let (mut upstream_read, mut upstream_write) = split(upstream);

    tokio::select! {
        biased;
        _ = close.cancelled() => Ok(()),
        result = pumps::request_pump(&mut downstream_read, &mut upstream_write, &table, &pump_config, collaborators.metrics.as_ref()) => result,
        result = pumps::response_pump(&mut upstream_read, &mut downstream_write, &table, &pump_config, &collaborators.address_mapper, collaborators.metrics.as_ref()) => result,
    }
}

pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
