//! The supervisor (spec §4.10): accepts `Conn` items from a
//! [`Listener`], spawns a handler per connection with panic isolation,
//! and orchestrates graceful shutdown. Generalizes the teacher's
//! `accept_loop`/`drain_tasks`/`run_server` trio in `main.rs` from a
//! single `handle_client` call into the full dial-auth-pump handler
//! pipeline.

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::{select, time};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn, Instrument};

use crate::collaborators::Listener;
use crate::config::HandlerConfig;
use crate::dialer::DialerStep;
use crate::error::ProxyError;
use crate::handler::{self, HandlerCollaborators};
use crate::registry::ConnSet;

/// Accepts connections until `shutdown_token` fires, spawning one
/// handler task per connection onto `join_set`. Mirrors the teacher's
/// `accept_loop`, generalized from a raw `TcpListener` to any
/// [`Listener`] implementation.
async fn accept_loop(
    listener: &dyn Listener,
    dialer: Arc<DialerStep>,
    handler_config: Arc<HandlerConfig>,
    collaborators: Arc<HandlerCollaborators>,
    conn_set: Arc<ConnSet>,
    shutdown_token: CancellationToken,
    join_set: &mut JoinSet<Result<(), ProxyError>>,
) {
    loop {
        select! {
            result = listener.accept() => {
                match result {
                    Ok(conn) => {
                        let span = tracing::info_span!("client_session", broker = %conn.broker_address.0);
                        let dialer = dialer.clone();
                        let handler_config = handler_config.clone();
                        let collaborators = collaborators.clone();
                        let conn_set = conn_set.clone();
                        join_set.spawn(
                            handler::handle_connection(conn, dialer, handler_config, collaborators, conn_set)
                                .instrument(span),
                        );
                    }
                    Err(e) => {
                        error!(error = %e, "failed to accept a new downstream connection");
                        continue;
                    }
                }
            }
            _ = shutdown_token.cancelled() => {
                warn!("graceful shutdown requested; stopping accept loop");
                break;
            }
        }
    }
}

/// Waits for every spawned handler task to finish, up to
/// `timeout_secs`, logging how each one ended. A panic inside a handler
/// surfaces here as `Err(join_err)` rather than tearing down the
/// supervisor, satisfying spec §7's `internal_panic` policy.
async fn drain_tasks(join_set: &mut JoinSet<Result<(), ProxyError>>, timeout_secs: u64) {
    info!("draining connection handler tasks with a {timeout_secs} second timeout");
    let drain_result = time::timeout(time::Duration::from_secs(timeout_secs), async {
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(Ok(())) => debug!("a connection handler exited cleanly"),
                Ok(Err(e)) if e.is_noisy() => error!(error = %e, "a connection handler returned an error"),
                Ok(Err(e)) => debug!(error = %e, "a connection handler closed quietly"),
                Err(join_err) => error!(error = %join_err, "a connection handler panicked or was cancelled"),
            }
        }
    })
    .await;

    match drain_result {
        Ok(_) => info!("all connection handlers have exited"),
        Err(_) => warn!("timed out waiting for connection handlers to finish ({timeout_secs}s); shutting down now"),
    }
}

/// Runs the accept loop until `shutdown_token` fires, then drains
/// in-flight handlers and closes every connection still registered in
/// `conn_set`.
pub async fn run(
    listener: Arc<dyn Listener>,
    dialer: Arc<DialerStep>,
    handler_config: Arc<HandlerConfig>,
    collaborators: Arc<HandlerCollaborators>,
    conn_set: Arc<ConnSet>,
    shutdown_token: CancellationToken,
    client_drain_timeout_secs: u64,
) {
    let mut join_set = JoinSet::new();

    accept_loop(
        listener.as_ref(),
        dialer,
        handler_config,
        collaborators,
        conn_set.clone(),
        shutdown_token,
        &mut join_set,
    )
    .await;

    let closed = conn_set.close_all();
    info!("requested close of {closed} registered connections");

    drain_tasks(&mut join_set, client_drain_timeout_secs).await;
}
