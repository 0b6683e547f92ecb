//! SOCKS5 forward-proxy hop (RFC 1928, username/password sub-negotiation
//! per RFC 1929), delegated to the `tokio-socks` crate rather than
//! hand-rolled — the pack's `sticnarf-tokio-socks` example is exactly
//! this crate's own client, so there is no value in reimplementing it.

use super::{ForwardProxyAuth, ProxyStream};
use crate::error::{ProxyError, ProxyResult};

pub async fn negotiate(
    proxy_stream: Box<dyn ProxyStream>,
    target: (&str, u16),
    auth: &ForwardProxyAuth,
) -> ProxyResult<Box<dyn ProxyStream>> {
    let target_addr = (target.0.to_string(), target.1);

    let stream = match (&auth.username, &auth.password) {
        (Some(user), Some(pass)) => {
            tokio_socks::tcp::Socks5Stream::connect_with_password_and_socket(
                proxy_stream,
                target_addr,
                user.as_str(),
                pass.as_str(),
            )
            .await
        }
        _ => tokio_socks::tcp::Socks5Stream::connect_with_socket(proxy_stream, target_addr).await,
    }
    .map_err(|e| ProxyError::ForwardProxy(format!("socks5 handshake to {}:{} failed: {e}", target.0, target.1)))?;

    Ok(Box::new(stream))
}
