//! Upstream gateway-client auth (spec §4.7): once the upstream
//! connection is established, obtains a token from an injected
//! [`crate::collaborators::TokenProvider`] and presents it via the same
//! frame [`super::gateway_server`] validates on the other side.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::auth::gateway_frame::{self, AuthFrame};
use crate::collaborators::TokenProvider;
use crate::error::ProxyError;

#[derive(Clone)]
pub struct GatewayClientConfig {
    pub magic: u64,
    pub method: String,
    pub timeout: Duration,
}

/// Runs the handshake over `stream`. A non-zero reply status is a fatal
/// auth error, per spec §4.7.
pub async fn run<S: AsyncRead + AsyncWrite + Unpin>(
    stream: &mut S,
    config: &GatewayClientConfig,
    provider: &dyn TokenProvider,
) -> crate::error::ProxyResult<()> {
    let token_info = tokio::time::timeout(config.timeout, provider.get_token(&config.method))
        .await
        .map_err(|_| ProxyError::Auth("gateway-client auth: token fetch timed out".to_string()))?
        .map_err(|e| ProxyError::Auth(format!("gateway-client auth: token provider error: {e}")))?;

    let frame = AuthFrame {
        magic: config.magic,
        method: config.method.clone(),
        token: token_info.token,
    };
    gateway_frame::write_frame(stream, &frame).await?;

    let reply = gateway_frame::read_reply(stream).await?;
    if reply.status != 0 {
        return Err(ProxyError::Auth(format!(
            "gateway-client auth: upstream rejected token (status {}): {}",
            reply.status, reply.error
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::TokenInfo;
    use async_trait::async_trait;

    struct StaticProvider(&'static str);
    #[async_trait]
    impl TokenProvider for StaticProvider {
        async fn get_token(&self, _method: &str) -> anyhow::Result<TokenInfo> {
            Ok(TokenInfo {
                token: self.0.to_string(),
            })
        }
    }

    fn config() -> GatewayClientConfig {
        GatewayClientConfig {
            magic: 0x1234,
            method: "bearer-v1".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn sends_the_provided_token_and_accepts_a_zero_status() {
        let (mut client, mut server) = tokio::io::duplex(512);
        tokio::spawn(async move {
            let frame = gateway_frame::read_frame(&mut server).await.unwrap();
            assert_eq!(frame.token, "minted-token");
            let reply = gateway_frame::AuthReply {
                status: 0,
                error: String::new(),
            };
            gateway_frame::write_reply(&mut server, &reply).await.unwrap();
        });
        run(&mut client, &config(), &StaticProvider("minted-token")).await.unwrap();
    }

    #[tokio::test]
    async fn treats_a_non_zero_status_as_a_fatal_error() {
        let (mut client, mut server) = tokio::io::duplex(512);
        tokio::spawn(async move {
            let _ = gateway_frame::read_frame(&mut server).await.unwrap();
            let reply = gateway_frame::AuthReply {
                status: 1,
                error: "token expired".to_string(),
            };
            gateway_frame::write_reply(&mut server, &reply).await.unwrap();
        });
        let err = run(&mut client, &config(), &StaticProvider("stale-token"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProxyError::Auth(_)));
    }
}
