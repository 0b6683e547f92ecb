//! Wire codec for the gateway auth frame (spec §6), shared by both the
//! server side ([`super::gateway_server`]) and the client side
//! ([`super::gateway_client`]) since the request and reply shapes are
//! symmetric between the two directions.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{ProxyError, ProxyResult};

/// `{magic: u64, method_len: u32, method: utf8, token_len: u32, token: utf8}`
pub struct AuthFrame {
    pub magic: u64,
    pub method: String,
    pub token: String,
}

/// `{status: u32 (0 = ok), err_len: u32, err: utf8}`
pub struct AuthReply {
    pub status: u32,
    pub error: String,
}

const MAX_FIELD_LEN: u32 = 64 * 1024;

pub async fn write_frame<W: AsyncWrite + Unpin>(writer: &mut W, frame: &AuthFrame) -> ProxyResult<()> {
    let mut buf = Vec::with_capacity(8 + 4 + frame.method.len() + 4 + frame.token.len());
    buf.extend_from_slice(&frame.magic.to_be_bytes());
    write_string(&mut buf, &frame.method);
    write_string(&mut buf, &frame.token);
    writer.write_all(&buf).await.map_err(ProxyError::Io)?;
    Ok(())
}

pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> ProxyResult<AuthFrame> {
    let mut magic_buf = [0u8; 8];
    reader.read_exact(&mut magic_buf).await.map_err(ProxyError::Io)?;
    let magic = u64::from_be_bytes(magic_buf);
    let method = read_string(reader).await?;
    let token = read_string(reader).await?;
    Ok(AuthFrame { magic, method, token })
}

pub async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &AuthReply) -> ProxyResult<()> {
    let mut buf = Vec::with_capacity(4 + 4 + reply.error.len());
    buf.extend_from_slice(&reply.status.to_be_bytes());
    write_string(&mut buf, &reply.error);
    writer.write_all(&buf).await.map_err(ProxyError::Io)?;
    Ok(())
}

pub async fn read_reply<R: AsyncRead + Unpin>(reader: &mut R) -> ProxyResult<AuthReply> {
    let mut status_buf = [0u8; 4];
    reader.read_exact(&mut status_buf).await.map_err(ProxyError::Io)?;
    let status = u32::from_be_bytes(status_buf);
    let error = read_string(reader).await?;
    Ok(AuthReply { status, error })
}

fn write_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

async fn read_string<R: AsyncRead + Unpin>(reader: &mut R) -> ProxyResult<String> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf).await.map_err(ProxyError::Io)?;
    let len = u32::from_be_bytes(len_buf);
    if len > MAX_FIELD_LEN {
        return Err(ProxyError::Protocol(format!(
            "gateway auth frame field of {len} bytes exceeds the {MAX_FIELD_LEN} byte cap"
        )));
    }
    let mut bytes = vec![0u8; len as usize];
    reader.read_exact(&mut bytes).await.map_err(ProxyError::Io)?;
    String::from_utf8(bytes).map_err(|_| ProxyError::Protocol("gateway auth frame field is not valid UTF-8".to_string()))
}
