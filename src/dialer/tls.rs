//! The TLS dialer step: wraps whatever stream the inner chain produced
//! in a `rustls` client handshake against the broker's hostname as SNI,
//! per spec §4.1's "completes the handshake synchronously against
//! addr's SNI."

use std::sync::Arc;
use std::time::Duration;

use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::{rustls, TlsConnector};

use super::ProxyStream;
use crate::error::{ProxyError, ProxyResult};

/// Shared, already-built TLS client configuration. Cheap to clone since
/// `rustls::ClientConfig` is held behind an `Arc`.
#[derive(Clone)]
pub struct TlsDialConfig {
    connector: TlsConnector,
}

impl TlsDialConfig {
    /// Builds a client config trusting the Mozilla root store
    /// (`webpki-roots`), matching the common case of brokers fronted by
    /// a publicly-trusted certificate.
    pub fn with_webpki_roots() -> Self {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        Self {
            connector: TlsConnector::from(Arc::new(config)),
        }
    }

    /// Builds a client config trusting a custom CA bundle (PEM), for
    /// brokers behind an internal certificate authority.
    pub fn with_custom_ca(ca_pem: &[u8]) -> ProxyResult<Self> {
        let mut roots = rustls::RootCertStore::empty();
        let mut reader = std::io::Cursor::new(ca_pem);
        for cert in rustls_pemfile::certs(&mut reader) {
            let cert = cert.map_err(|e| ProxyError::Tls(format!("invalid CA certificate: {e}")))?;
            roots
                .add(cert)
                .map_err(|e| ProxyError::Tls(format!("failed to add CA certificate: {e}")))?;
        }
        let config = rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        Ok(Self {
            connector: TlsConnector::from(Arc::new(config)),
        })
    }
}

pub async fn wrap(
    stream: Box<dyn ProxyStream>,
    hostname: &str,
    timeout: Duration,
    config: &TlsDialConfig,
) -> ProxyResult<Box<dyn ProxyStream>> {
    let server_name = ServerName::try_from(hostname.to_string())
        .map_err(|_| ProxyError::Tls(format!("invalid SNI hostname: {hostname}")))?;

    let handshake = config.connector.connect(server_name, stream);
    let tls_stream = tokio::time::timeout(timeout, handshake)
        .await
        .map_err(|_| ProxyError::Tls(format!("TLS handshake with {hostname} timed out after {timeout:?}")))?
        .map_err(|e| ProxyError::Tls(format!("TLS handshake with {hostname} failed: {e}")))?;

    Ok(Box::new(tls_stream))
}
