//! Upstream SASL PLAIN client (spec §4.8): performs the same two-frame
//! handshake as [`super::local_sasl_server`] but from the initiating
//! side, against the real broker, using configured credentials rather
//! than an injected authenticator.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::{ProxyError, ProxyResult};
use crate::kafka_protocol::frame::{self, BufferPool};
use crate::kafka_protocol::response_header::ResponseHeader;
use crate::kafka_protocol::sasl::{
    self, encode_plain_credentials, SaslAuthenticateRequestBody, SaslAuthenticateResponseBody,
    SaslHandshakeRequestBody, SaslHandshakeResponseBody, PLAIN_MECHANISM, SASL_AUTHENTICATE_KEY,
    SASL_HANDSHAKE_KEY,
};

#[derive(Clone)]
pub struct SaslClientConfig {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

/// Runs the handshake against `stream` (the established upstream
/// connection). On success, the caller clears its deadlines — Kafka
/// sessions run without a read/write timeout afterward.
pub async fn run<S: AsyncRead + AsyncWrite + Unpin>(stream: &mut S, config: &SaslClientConfig) -> ProxyResult<()> {
    let pool = BufferPool::new(4096);

    let handshake_request = {
        let mut body = sasl::encode_request_header(SASL_HANDSHAKE_KEY, 1, 1, &config.client_id);
        body.extend_from_slice(&SaslHandshakeRequestBody {
            mechanism: PLAIN_MECHANISM.to_string(),
        }.encode());
        body
    };
    frame::write_frame(stream, &handshake_request, Some(config.write_timeout)).await?;

    let handshake_response = read_response_body(stream, &pool, config.read_timeout).await?;
    let handshake_reply = SaslHandshakeResponseBody::decode(&handshake_response)?;
    if !handshake_reply.mechanisms.iter().any(|m| m == PLAIN_MECHANISM) {
        return Err(ProxyError::Auth(
            "upstream SASL: broker does not support PLAIN".to_string(),
        ));
    }
    if handshake_reply.error_code != 0 {
        return Err(ProxyError::Auth(format!(
            "upstream SASL: handshake rejected with error code {}",
            handshake_reply.error_code
        )));
    }

    let authenticate_request = {
        let mut body = sasl::encode_request_header(SASL_AUTHENTICATE_KEY, 1, 2, &config.client_id);
        body.extend_from_slice(&SaslAuthenticateRequestBody {
            auth_bytes: encode_plain_credentials(&config.username, &config.password),
        }.encode());
        body
    };
    frame::write_frame(stream, &authenticate_request, Some(config.write_timeout)).await?;

    let authenticate_response = read_response_body(stream, &pool, config.read_timeout).await?;
    let authenticate_reply = SaslAuthenticateResponseBody::decode(&authenticate_response)?;
    if authenticate_reply.error_code != 0 {
        return Err(ProxyError::Auth(format!(
            "upstream SASL: authenticate rejected with error code {}: {}",
            authenticate_reply.error_code,
            authenticate_reply.error_message.unwrap_or_default()
        )));
    }

    Ok(())
}

async fn read_response_body<S: AsyncRead + Unpin>(
    stream: &mut S,
    pool: &BufferPool,
    timeout: Duration,
) -> ProxyResult<Vec<u8>> {
    let frame = frame::read_frame(stream, pool, Some(timeout))
        .await?
        .ok_or_else(|| ProxyError::Protocol("upstream closed the connection during SASL handshake".to_string()))?;
    let header = ResponseHeader::parse(&frame)?;
    let _ = header;
    Ok(frame[4..].to_vec())
}
