use std::time::Duration;

use tokio::net::TcpStream;

use crate::error::{ProxyError, ProxyResult};

use super::ProxyStream;

pub async fn dial(addr: (&str, u16), timeout: Duration) -> ProxyResult<Box<dyn ProxyStream>> {
    let connect = TcpStream::connect(addr);
    let stream = tokio::time::timeout(timeout, connect)
        .await
        .map_err(|_| {
            ProxyError::Dial(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("dial {}:{} timed out after {:?}", addr.0, addr.1, timeout),
            ))
        })?
        .map_err(ProxyError::Dial)?;
    Ok(Box::new(stream))
}
