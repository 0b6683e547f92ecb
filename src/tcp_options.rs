//! Applies keep-alive and buffer-size tuning to an established upstream
//! socket (spec §4.9 step 5). Per the Design Note on "TCP option
//! application when the stream is wrapped," the raw socket is only
//! reachable when the dialer chain's outermost step was `Direct` — a
//! SOCKS5, HTTP CONNECT, or TLS wrapper hides it, so this is a
//! best-effort attempt that logs a warning rather than an error when it
//! cannot reach the socket.

use std::time::Duration;

use socket2::{SockRef, TcpKeepalive};
use tokio::net::TcpStream;

#[derive(Debug, Clone, Copy)]
pub struct TcpConnOptions {
    pub keep_alive: Duration,
    pub read_buffer_size: usize,
    pub write_buffer_size: usize,
}

/// Applies `options` directly to a raw `TcpStream`. The handler only
/// has a concrete `TcpStream` to offer this when the dialer chain's
/// outermost step was `Direct`; when the stream is wrapped (SOCKS5,
/// HTTP CONNECT, TLS) it calls [`warn_unreachable`] instead, per the
/// Design Note's best-effort policy.
pub fn apply_to_tcp_stream(stream: &TcpStream, options: &TcpConnOptions) -> std::io::Result<()> {
    let sock_ref = SockRef::from(stream);
    let keepalive = TcpKeepalive::new().with_time(options.keep_alive);
    sock_ref.set_tcp_keepalive(&keepalive)?;
    sock_ref.set_recv_buffer_size(options.read_buffer_size)?;
    sock_ref.set_send_buffer_size(options.write_buffer_size)?;
    Ok(())
}

/// Logs the best-effort skip when the upstream stream is wrapped and
/// its raw socket isn't reachable.
pub fn warn_unreachable() {
    tracing::warn!("TCP options requested on a wrapped upstream stream (TLS/forward-proxy); skipping");
}
