//! Downstream gateway-server auth (spec §4.6): runs before local SASL,
//! reads the fixed-format frame from the client, checks the magic and
//! method against configuration, and validates the token through an
//! injected [`crate::collaborators::TokenVerifier`].

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::auth::gateway_frame::{self, AuthReply};
use crate::collaborators::{AuthOutcome, TokenVerifier};
use crate::error::{ProxyError, ProxyResult};

#[derive(Clone)]
pub struct GatewayServerConfig {
    pub magic: u64,
    pub method: String,
    pub timeout: Duration,
}

/// Runs the handshake over `stream`. On success the connection may
/// proceed to local SASL (if enabled) or straight to the pumps.
pub async fn run<S: AsyncRead + AsyncWrite + Unpin>(
    stream: &mut S,
    config: &GatewayServerConfig,
    verifier: &dyn TokenVerifier,
) -> ProxyResult<()> {
    let frame = gateway_frame::read_frame(stream).await?;

    if frame.magic != config.magic || frame.method != config.method {
        let reply = AuthReply {
            status: 1,
            error: "magic or method mismatch".to_string(),
        };
        let _ = gateway_frame::write_reply(stream, &reply).await;
        return Err(ProxyError::Auth(
            "gateway-server auth: magic or method mismatch".to_string(),
        ));
    }

    let outcome = tokio::time::timeout(config.timeout, verifier.verify_token(&frame.method, &frame.token))
        .await
        .map_err(|_| ProxyError::Auth("gateway-server auth: token verification timed out".to_string()))?
        .map_err(|e| ProxyError::Auth(format!("gateway-server auth: verifier error: {e}")))?;

    match outcome {
        AuthOutcome::Ok => {
            let reply = AuthReply {
                status: 0,
                error: String::new(),
            };
            gateway_frame::write_reply(stream, &reply).await?;
            Ok(())
        }
        AuthOutcome::Denied => {
            let reply = AuthReply {
                status: 1,
                error: "token denied".to_string(),
            };
            let _ = gateway_frame::write_reply(stream, &reply).await;
            Err(ProxyError::Auth("gateway-server auth: token denied".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::gateway_frame::AuthFrame;
    use async_trait::async_trait;

    struct AlwaysOk;
    #[async_trait]
    impl TokenVerifier for AlwaysOk {
        async fn verify_token(&self, _method: &str, _token: &str) -> anyhow::Result<AuthOutcome> {
            Ok(AuthOutcome::Ok)
        }
    }

    struct AlwaysDenied;
    #[async_trait]
    impl TokenVerifier for AlwaysDenied {
        async fn verify_token(&self, _method: &str, _token: &str) -> anyhow::Result<AuthOutcome> {
            Ok(AuthOutcome::Denied)
        }
    }

    fn config() -> GatewayServerConfig {
        GatewayServerConfig {
            magic: 0x1234,
            method: "bearer-v1".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn accepts_a_valid_token() {
        let (mut client, mut server) = tokio::io::duplex(512);
        let frame = AuthFrame {
            magic: 0x1234,
            method: "bearer-v1".to_string(),
            token: "good-token".to_string(),
        };
        tokio::spawn(async move {
            gateway_frame::write_frame(&mut client, &frame).await.unwrap();
            let reply = gateway_frame::read_reply(&mut client).await.unwrap();
            assert_eq!(reply.status, 0);
        });
        run(&mut server, &config(), &AlwaysOk).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_a_mismatched_magic() {
        let (mut client, mut server) = tokio::io::duplex(512);
        let frame = AuthFrame {
            magic: 0xFFFF,
            method: "bearer-v1".to_string(),
            token: "good-token".to_string(),
        };
        tokio::spawn(async move {
            let _ = gateway_frame::write_frame(&mut client, &frame).await;
            let _ = gateway_frame::read_reply(&mut client).await;
        });
        let err = run(&mut server, &config(), &AlwaysOk).await.unwrap_err();
        assert!(matches!(err, ProxyError::Auth(_)));
    }

    #[tokio::test]
    async fn rejects_a_denied_token() {
        let (mut client, mut server) = tokio::io::duplex(512);
        let frame = AuthFrame {
            magic: 0x1234,
            method: "bearer-v1".to_string(),
            token: "bad-token".to_string(),
        };
        tokio::spawn(async move {
            let _ = gateway_frame::write_frame(&mut client, &frame).await;
            let _ = gateway_frame::read_reply(&mut client).await;
        });
        let err = run(&mut server, &config(), &AlwaysDenied).await.unwrap_err();
        assert!(matches!(err, ProxyError::Auth(_)));
    }
}
