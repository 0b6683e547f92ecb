//! The two connection pumps (spec §4.3/§4.4): one per direction, driving
//! the frame codec, the correlation table, and the address-rewriting
//! response filter. Runs concurrently inside [`crate::handler`] via
//! `tokio::select!`; either pump finishing (cleanly or with an error)
//! tears down the other side of the connection.

use std::collections::HashSet;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::collaborators::AddressMapper;
use crate::correlation::{CorrelationTable, PendingRequest};
use crate::error::{ProxyError, ProxyResult};
use crate::kafka_protocol::address_rewrite;
use crate::kafka_protocol::frame::{self, BufferPool};
use crate::kafka_protocol::request_header::RequestHeader;
use crate::kafka_protocol::response_header::ResponseHeader;
use crate::metrics::{Direction, ProxyMetrics};

pub struct PumpConfig {
    pub request_buf_size: usize,
    pub response_buf_size: usize,
    pub forbidden_api_keys: HashSet<i16>,
}

/// Downstream → upstream. Reads one request frame at a time, enforces
/// `forbidden_api_keys`, reserves a correlation-table slot, and
/// forwards the frame verbatim — the codec and this pump never mutate
/// request bytes (spec §4.2).
pub async fn request_pump<D, U>(
    downstream: &mut D,
    upstream: &mut U,
    table: &CorrelationTable,
    config: &PumpConfig,
    metrics: &dyn ProxyMetrics,
) -> ProxyResult<()>
where
    D: AsyncRead + Unpin,
    U: AsyncWrite + Unpin,
{
    let pool = BufferPool::new(config.request_buf_size);
    loop {
        let Some(body) = frame::read_frame(downstream, &pool, None).await? else {
            return Ok(());
        };

        let header = RequestHeader::parse(&body)?;
        if config.forbidden_api_keys.contains(&header.api_key) {
            metrics.connection_rejected("forbidden_api_key");
            return Err(ProxyError::ForbiddenApiKey(header.api_key));
        }

        let reservation = table.reserve().await?;
        table.insert(
            reservation,
            header.correlation_id,
            PendingRequest {
                api_key: header.api_key,
                api_version: header.api_version,
            },
        )?;

        frame::write_frame(upstream, &body, None).await?;
        metrics.bytes_forwarded(Direction::DownstreamToUpstream, body.len() as u64);
    }
}

/// Upstream → downstream. Reads one response frame at a time, looks up
/// and removes the matching correlation entry, rewrites address-bearing
/// payloads through `mapper`, and forwards the (possibly rewritten)
/// frame with a recomputed length prefix.
pub async fn response_pump<U, D>(
    upstream: &mut U,
    downstream: &mut D,
    table: &CorrelationTable,
    config: &PumpConfig,
    mapper: &AddressMapper,
    metrics: &dyn ProxyMetrics,
) -> ProxyResult<()>
where
    U: AsyncRead + Unpin,
    D: AsyncWrite + Unpin,
{
    let pool = BufferPool::new(config.response_buf_size);
    loop {
        let Some(body) = frame::read_frame(upstream, &pool, None).await? else {
            return Ok(());
        };

        let header = ResponseHeader::parse(&body)?;
        let pending = table.remove(header.correlation_id).ok_or_else(|| {
            ProxyError::Protocol(format!(
                "response for unknown correlation id {}",
                header.correlation_id
            ))
        })?;

        match address_rewrite::rewrite(pending.api_key, pending.api_version, &body, mapper)? {
            Some(rewritten) => {
                metrics.response_rewritten(pending.api_key);
                frame::write_frame(downstream, &rewritten, None).await?;
            }
            None => {
                frame::write_frame(downstream, &body, None).await?;
            }
        }
        metrics.bytes_forwarded(Direction::UpstreamToDownstream, body.len() as u64);
    }
}

/// Both pumps run with no read/write deadline once handshakes complete
/// (spec §5); this constant documents that `None` timeout is deliberate,
/// not an oversight, for anyone grepping for a stray `Duration`.
pub const NO_PUMP_DEADLINE: Option<Duration> = None;
