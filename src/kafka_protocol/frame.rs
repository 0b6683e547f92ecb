//! Length-prefixed Kafka frame I/O.
//!
//! A frame on the wire is a 4-byte big-endian size followed by exactly that
//! many bytes. Reading honors `read_timeout` per underlying `read()` call
//! (not per frame, since a slow-trickling frame from a live client should
//! not time out as a whole) and refuses to admit a frame larger than
//! [`MAX_FRAME_SIZE`] as a guard against garbage or malicious input.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::error::ProxyError;

/// Frames larger than this are rejected outright.
pub const MAX_FRAME_SIZE: usize = 100 * 1024 * 1024;

/// A small pool of reusable frame buffers, avoiding a fresh heap allocation
/// for every request/response that fits within the configured buffer size.
#[derive(Clone)]
pub struct BufferPool {
    slab: Arc<Mutex<Vec<Vec<u8>>>>,
    buf_size: usize,
}

impl BufferPool {
    pub fn new(buf_size: usize) -> Self {
        Self {
            slab: Arc::new(Mutex::new(Vec::new())),
            buf_size,
        }
    }

    /// Borrows a buffer with at least `len` bytes of capacity. Frames that
    /// fit within `buf_size` come from the pool; larger ones get a one-off
    /// heap allocation and are never returned to the pool.
    pub fn acquire(&self, len: usize) -> PooledBuffer {
        if len <= self.buf_size {
            let mut buf = self.slab.lock().pop().unwrap_or_default();
            buf.clear();
            buf.resize(len, 0);
            PooledBuffer {
                buf,
                pool: Some(self.slab.clone()),
            }
        } else {
            PooledBuffer {
                buf: vec![0u8; len],
                pool: None,
            }
        }
    }
}

/// A buffer checked out of a [`BufferPool`]. Returned automatically on drop.
pub struct PooledBuffer {
    buf: Vec<u8>,
    pool: Option<Arc<Mutex<Vec<Vec<u8>>>>>,
}

impl std::ops::Deref for PooledBuffer {
    type Target = Vec<u8>;
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if let Some(pool) = &self.pool {
            let buf = std::mem::take(&mut self.buf);
            pool.lock().push(buf);
        }
    }
}

/// Reads one length-prefixed frame. Returns `Ok(None)` on a clean EOF that
/// lands exactly on a frame boundary (the client closed the connection
/// between frames); any other EOF is a protocol error.
pub async fn read_frame<S>(
    stream: &mut S,
    pool: &BufferPool,
    read_timeout: Option<Duration>,
) -> Result<Option<PooledBuffer>, ProxyError>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    match read_with_timeout(stream, &mut len_buf[..1], read_timeout).await {
        Ok(0) => return Ok(None),
        Ok(_) => {}
        Err(e) => return Err(e),
    }
    read_exact_with_timeout(stream, &mut len_buf[1..], read_timeout)
        .await
        .map_err(|_| ProxyError::Protocol("eof while reading frame length".into()))?;

    let size = i32::from_be_bytes(len_buf);
    if size < 0 {
        return Err(ProxyError::Protocol(format!(
            "negative frame size {size}"
        )));
    }
    let size = size as usize;
    if size > MAX_FRAME_SIZE {
        return Err(ProxyError::Protocol(format!(
            "frame size {size} exceeds max {MAX_FRAME_SIZE}"
        )));
    }

    let mut body = pool.acquire(size);
    read_exact_with_timeout(stream, &mut body, read_timeout)
        .await
        .map_err(|_| ProxyError::Protocol("eof while reading frame body".into()))?;

    Ok(Some(body))
}

/// Writes one length-prefixed frame.
pub async fn write_frame<S>(
    stream: &mut S,
    body: &[u8],
    write_timeout: Option<Duration>,
) -> Result<(), ProxyError>
where
    S: AsyncWrite + Unpin,
{
    let len = (body.len() as u32).to_be_bytes();
    write_with_timeout(stream, &len, write_timeout).await?;
    write_with_timeout(stream, body, write_timeout).await?;
    Ok(())
}

/// Reads a single chunk (one `read()` syscall), honoring `read_timeout` on
/// that call alone. Returns the number of bytes read (0 = EOF).
async fn read_with_timeout<S>(
    stream: &mut S,
    buf: &mut [u8],
    read_timeout: Option<Duration>,
) -> Result<usize, ProxyError>
where
    S: AsyncRead + Unpin,
{
    match read_timeout {
        Some(dur) => timeout(dur, stream.read(buf))
            .await
            .map_err(|_| ProxyError::Protocol("read timed out".into()))?
            .map_err(ProxyError::Io),
        None => stream.read(buf).await.map_err(ProxyError::Io),
    }
}

/// Reads until `buf` is full, applying `read_timeout` to each underlying
/// `read()` call rather than to the whole operation.
async fn read_exact_with_timeout<S>(
    stream: &mut S,
    buf: &mut [u8],
    read_timeout: Option<Duration>,
) -> Result<(), ProxyError>
where
    S: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = read_with_timeout(stream, &mut buf[filled..], read_timeout).await?;
        if n == 0 {
            return Err(ProxyError::Protocol("unexpected eof".into()));
        }
        filled += n;
    }
    Ok(())
}

async fn write_with_timeout<S>(
    stream: &mut S,
    buf: &[u8],
    write_timeout: Option<Duration>,
) -> Result<(), ProxyError>
where
    S: AsyncWrite + Unpin,
{
    match write_timeout {
        Some(dur) => timeout(dur, stream.write_all(buf))
            .await
            .map_err(|_| ProxyError::Protocol("write timed out".into()))?
            .map_err(ProxyError::Io),
        None => stream.write_all(buf).await.map_err(ProxyError::Io),
    }
}
