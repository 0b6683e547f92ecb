//! Downstream SASL PLAIN server (spec §4.5): a two-state handshake
//! (`AwaitingHandshake` → `AwaitingAuthenticate` → `Authenticated`) that
//! gates entry to the request/response pumps. Runs over whole Kafka
//! frames via [`crate::kafka_protocol::frame`], since the client speaks
//! the same length-prefixed framing for the handshake as for ordinary
//! requests.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::collaborators::{AuthOutcome, PasswordAuthenticator};
use crate::error::{ProxyError, ProxyResult};
use crate::kafka_protocol::frame::{self, BufferPool};
use crate::kafka_protocol::kafka_error_codes::{SASL_AUTHENTICATION_FAILED, UNSUPPORTED_SASL_MECHANISM};
use crate::kafka_protocol::request_header::RequestHeader;
use crate::kafka_protocol::sasl::{
    self, SaslAuthenticateRequestBody, SaslAuthenticateResponseBody, SaslHandshakeRequestBody,
    SaslHandshakeResponseBody, PLAIN_MECHANISM, SASL_AUTHENTICATE_KEY, SASL_HANDSHAKE_KEY,
};

#[derive(Clone)]
pub struct LocalSaslConfig {
    pub timeout: Duration,
}

/// Runs the handshake to completion over `stream`. On success, ordinary
/// Kafka frames follow immediately and belong to the pumps, not this
/// module — it reads exactly the two frames the handshake needs and no
/// more.
pub async fn run<S: AsyncRead + AsyncWrite + Unpin>(
    stream: &mut S,
    config: &LocalSaslConfig,
    authenticator: &dyn PasswordAuthenticator,
) -> ProxyResult<()> {
    let pool = BufferPool::new(4096);

    let handshake_frame = read_frame_or_close(stream, &pool).await?;
    let header = RequestHeader::parse(&handshake_frame)?;
    if header.api_key != SASL_HANDSHAKE_KEY {
        return Err(ProxyError::Protocol(format!(
            "expected SaslHandshake (key {SASL_HANDSHAKE_KEY}) while awaiting handshake, got key {}",
            header.api_key
        )));
    }
    let body = SaslHandshakeRequestBody::decode(&handshake_frame[header.header_len..])?;

    if body.mechanism != PLAIN_MECHANISM {
        let reply = SaslHandshakeResponseBody {
            error_code: UNSUPPORTED_SASL_MECHANISM,
            mechanisms: vec![PLAIN_MECHANISM.to_string()],
        };
        write_response(stream, header.correlation_id, &reply.encode()).await?;
        return Err(ProxyError::Auth(format!(
            "local SASL: unsupported mechanism '{}'",
            body.mechanism
        )));
    }

    let ok_reply = SaslHandshakeResponseBody {
        error_code: 0,
        mechanisms: vec![PLAIN_MECHANISM.to_string()],
    };
    write_response(stream, header.correlation_id, &ok_reply.encode()).await?;

    let authenticate_frame = read_frame_or_close(stream, &pool).await?;
    let header = RequestHeader::parse(&authenticate_frame)?;
    if header.api_key != SASL_AUTHENTICATE_KEY {
        return Err(ProxyError::Protocol(format!(
            "expected SaslAuthenticate (key {SASL_AUTHENTICATE_KEY}) while awaiting authenticate, got key {}",
            header.api_key
        )));
    }
    let body = SaslAuthenticateRequestBody::decode(&authenticate_frame[header.header_len..])?;
    let (user, pass) = sasl::parse_plain_credentials(&body.auth_bytes)?;

    let outcome = tokio::time::timeout(config.timeout, authenticator.authenticate(&user, &pass))
        .await
        .map_err(|_| ProxyError::Auth("local SASL: authenticator timed out".to_string()))?
        .map_err(|e| ProxyError::Auth(format!("local SASL: authenticator error: {e}")))?;

    match outcome {
        AuthOutcome::Ok => {
            let reply = SaslAuthenticateResponseBody {
                error_code: 0,
                error_message: None,
                auth_bytes: Vec::new(),
            };
            write_response(stream, header.correlation_id, &reply.encode()).await?;
            Ok(())
        }
        AuthOutcome::Denied => {
            let reply = SaslAuthenticateResponseBody {
                error_code: SASL_AUTHENTICATION_FAILED,
                error_message: Some("authentication failed".to_string()),
                auth_bytes: Vec::new(),
            };
            let _ = write_response(stream, header.correlation_id, &reply.encode()).await;
            Err(ProxyError::Auth(format!("local SASL: credentials rejected for user '{user}'")))
        }
    }
}

async fn read_frame_or_close<S: AsyncRead + Unpin>(stream: &mut S, pool: &BufferPool) -> ProxyResult<Vec<u8>> {
    match frame::read_frame(stream, pool, None).await? {
        Some(buf) => Ok(buf.to_vec()),
        None => Err(ProxyError::Protocol(
            "connection closed before local SASL handshake completed".to_string(),
        )),
    }
}

async fn write_response<S: AsyncWrite + Unpin>(stream: &mut S, correlation_id: i32, body: &[u8]) -> ProxyResult<()> {
    let mut frame_body = sasl::encode_response_header(correlation_id);
    frame_body.extend_from_slice(body);
    frame::write_frame(stream, &frame_body, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kafka_protocol::sasl::encode_plain_credentials;
    use async_trait::async_trait;

    struct Accepts(&'static str, &'static str);
    #[async_trait]
    impl PasswordAuthenticator for Accepts {
        async fn authenticate(&self, user: &str, pass: &str) -> anyhow::Result<AuthOutcome> {
            Ok(if user == self.0 && pass == self.1 {
                AuthOutcome::Ok
            } else {
                AuthOutcome::Denied
            })
        }
    }

    fn config() -> LocalSaslConfig {
        LocalSaslConfig {
            timeout: Duration::from_secs(1),
        }
    }

    fn encode_handshake_request(correlation_id: i32) -> Vec<u8> {
        let mut body = sasl::encode_request_header(SASL_HANDSHAKE_KEY, 1, correlation_id, "test-client");
        body.extend_from_slice(&SaslHandshakeRequestBody {
            mechanism: PLAIN_MECHANISM.to_string(),
        }.encode());
        body
    }

    fn encode_authenticate_request(correlation_id: i32, user: &str, pass: &str) -> Vec<u8> {
        let mut body = sasl::encode_request_header(SASL_AUTHENTICATE_KEY, 1, correlation_id, "test-client");
        body.extend_from_slice(&SaslAuthenticateRequestBody {
            auth_bytes: encode_plain_credentials(user, pass),
        }.encode());
        body
    }

    #[tokio::test]
    async fn successful_handshake_admits_the_connection() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let pool = BufferPool::new(4096);

        tokio::spawn(async move {
            frame::write_frame(&mut client, &encode_handshake_request(1), None).await.unwrap();
            let _ = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
            frame::write_frame(&mut client, &encode_authenticate_request(2, "alice", "secret"), None)
                .await
                .unwrap();
            let _ = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
        });

        run(&mut server, &config(), &Accepts("alice", "secret")).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_credentials_close_the_connection() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let pool = BufferPool::new(4096);

        tokio::spawn(async move {
            frame::write_frame(&mut client, &encode_handshake_request(1), None).await.unwrap();
            let _ = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
            frame::write_frame(&mut client, &encode_authenticate_request(2, "alice", "wrong"), None)
                .await
                .unwrap();
            let _ = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
        });

        let err = run(&mut server, &config(), &Accepts("alice", "secret")).await.unwrap_err();
        assert!(matches!(err, ProxyError::Auth(_)));
    }
}
