//! The dialer chain (spec §4.1): turns a broker address into an
//! established, optionally TLS-wrapped, optionally forward-proxied byte
//! stream.
//!
//! Modeled as a tagged enum of steps rather than a trait hierarchy, per
//! the Design Note against dynamic dispatch *through the composition*
//! — each step still returns a type-erased stream, since SOCKS5, HTTP
//! CONNECT, TLS and a plain `TcpStream` are genuinely different
//! concrete types and the pumps only ever need `AsyncRead + AsyncWrite`.
//! Grounded in the pack's `ProxyConfig::connect -> Box<dyn
//! SessionStream>` pattern (deltachat's proxy module).

mod direct;
mod http_connect;
mod socks5;
mod tls;

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::{ProxyError, ProxyResult};

pub use tls::TlsDialConfig;

/// Any stream the dialer chain can hand back to the handler: a raw TCP
/// socket, or one wrapped in TLS and/or a forward-proxy tunnel. Carries
/// `Any` solely so [`crate::tcp_options`] can recover a concrete
/// `TcpStream` when the outermost dialer step was `Direct` — every
/// other caller only ever uses the `AsyncRead + AsyncWrite` half.
pub trait ProxyStream: AsyncRead + AsyncWrite + Unpin + Send + std::any::Any {
    fn as_any(&self) -> &dyn std::any::Any;
}
impl<T: AsyncRead + AsyncWrite + Unpin + Send + std::any::Any> ProxyStream for T {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Credentials for a forward-proxy hop (SOCKS5 username/password, or
/// HTTP Basic auth), shared by both forward-proxy steps.
#[derive(Debug, Clone, Default)]
pub struct ForwardProxyAuth {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A single step in the dialer chain. Each variant wraps the `inner`
/// step it sits on top of; the outermost step is the one actually
/// invoked, and it recurses down to `Direct` at the bottom.
pub enum DialerStep {
    /// Opens a plain TCP connection, bounded by `timeout`. `keep_alive`
    /// is applied by [`crate::tcp_options`] once the socket exists, not
    /// here — the dialer's job is only to produce a stream.
    Direct { timeout: Duration },

    /// Routes through a SOCKS5 proxy at `proxy_addr` (RFC 1928/1929),
    /// then continues dialing `addr` through it.
    Socks5 {
        inner: Box<DialerStep>,
        proxy_addr: (String, u16),
        auth: ForwardProxyAuth,
    },

    /// Routes through an HTTP CONNECT proxy at `proxy_addr` (RFC 7231
    /// §4.3.6), with optional Basic auth.
    HttpConnect {
        inner: Box<DialerStep>,
        proxy_addr: (String, u16),
        auth: ForwardProxyAuth,
    },

    /// Wraps whatever the inner step produces in a TLS handshake
    /// against `addr`'s hostname as SNI.
    Tls {
        inner: Box<DialerStep>,
        timeout: Duration,
        config: TlsDialConfig,
    },
}

impl DialerStep {
    /// Builds the chain spec.md's Data Model describes: TLS outermost
    /// when enabled, then a forward proxy if configured, else direct.
    /// Returns a config error if `forward_proxy_scheme` is set to
    /// anything other than `socks5` or `http`.
    pub fn build(
        dial_timeout: Duration,
        tls: Option<TlsDialConfig>,
        forward_proxy: Option<ForwardProxySpec>,
    ) -> ProxyResult<DialerStep> {
        let mut step = DialerStep::Direct {
            timeout: dial_timeout,
        };

        if let Some(fp) = forward_proxy {
            step = match fp.scheme.as_str() {
                "socks5" => DialerStep::Socks5 {
                    inner: Box::new(step),
                    proxy_addr: fp.address,
                    auth: fp.auth,
                },
                "http" => DialerStep::HttpConnect {
                    inner: Box::new(step),
                    proxy_addr: fp.address,
                    auth: fp.auth,
                },
                other => {
                    return Err(ProxyError::Config(format!(
                        "unsupported forward_proxy scheme '{other}' (expected socks5 or http)"
                    )))
                }
            };
        }

        if let Some(tls_config) = tls {
            step = DialerStep::Tls {
                inner: Box::new(step),
                timeout: dial_timeout,
                config: tls_config,
            };
        }

        Ok(step)
    }

    /// Dials `addr`, returning a type-erased stream once every layer of
    /// the chain has established its hop.
    pub async fn dial(&self, addr: (&str, u16)) -> ProxyResult<Box<dyn ProxyStream>> {
        match self {
            DialerStep::Direct { timeout } => direct::dial(addr, *timeout).await,
            DialerStep::Socks5 {
                inner,
                proxy_addr,
                auth,
            } => {
                let stream = inner.dial((proxy_addr.0.as_str(), proxy_addr.1)).await?;
                socks5::negotiate(stream, addr, auth).await
            }
            DialerStep::HttpConnect {
                inner,
                proxy_addr,
                auth,
            } => {
                let stream = inner.dial((proxy_addr.0.as_str(), proxy_addr.1)).await?;
                http_connect::negotiate(stream, addr, auth).await
            }
            DialerStep::Tls {
                inner,
                timeout,
                config,
            } => {
                let stream = inner.dial(addr).await?;
                tls::wrap(stream, addr.0, *timeout, config).await
            }
        }
    }
}

/// Forward-proxy configuration as parsed from `forward_proxy.*`.
pub struct ForwardProxySpec {
    pub scheme: String,
    pub address: (String, u16),
    pub auth: ForwardProxyAuth,
}
