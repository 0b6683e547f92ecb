//! HTTP CONNECT forward-proxy hop (RFC 7231 §4.3.6). Hand-rolled: the
//! teacher has no HTTP client dependency, and the pack's deltachat
//! proxy module hand-rolls exactly this request/response exchange
//! rather than pulling in a full HTTP client for a single verb.

use base64::Engine;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};

use super::{ForwardProxyAuth, ProxyStream};
use crate::error::{ProxyError, ProxyResult};

pub async fn negotiate(
    proxy_stream: Box<dyn ProxyStream>,
    target: (&str, u16),
    auth: &ForwardProxyAuth,
) -> ProxyResult<Box<dyn ProxyStream>> {
    let mut stream = proxy_stream;

    let host_port = format!("{}:{}", target.0, target.1);
    let mut request = format!("CONNECT {host_port} HTTP/1.1\r\nHost: {host_port}\r\n");
    if let (Some(user), Some(pass)) = (&auth.username, &auth.password) {
        let credentials = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
        request.push_str(&format!("Proxy-Authorization: Basic {credentials}\r\n"));
    }
    request.push_str("\r\n");

    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|e| ProxyError::ForwardProxy(format!("writing CONNECT request failed: {e}")))?;

    let mut reader = BufReader::new(&mut stream);
    let mut status_line = String::new();
    reader
        .read_line(&mut status_line)
        .await
        .map_err(|e| ProxyError::ForwardProxy(format!("reading CONNECT status line failed: {e}")))?;

    let status_code = parse_status_code(&status_line)
        .ok_or_else(|| ProxyError::ForwardProxy(format!("malformed CONNECT status line: {status_line:?}")))?;
    if !(200..300).contains(&status_code) {
        return Err(ProxyError::ForwardProxy(format!(
            "CONNECT to {host_port} rejected with status {status_code}"
        )));
    }

    // Drain the remaining response headers up to the blank line.
    loop {
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .await
            .map_err(|e| ProxyError::ForwardProxy(format!("reading CONNECT headers failed: {e}")))?;
        if n == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    Ok(stream)
}

fn parse_status_code(status_line: &str) -> Option<u16> {
    status_line.split_whitespace().nth(1)?.parse().ok()
}
