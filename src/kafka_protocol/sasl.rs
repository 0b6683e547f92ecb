//! Wire structures for the two Kafka APIs the SASL PLAIN handshakes use:
//! `SaslHandshake` (key 17) and `SaslAuthenticate` (key 36). Both are
//! non-flexible at the versions this proxy speaks (request header v1,
//! response header v0), so encoding mirrors the teacher's hand-rolled,
//! big-endian-by-hand style rather than pulling in a schema library.

use crate::kafka_protocol::kafka_error::{KafkaBrokerError, KafkaResult};
use crate::kafka_protocol::kafka_error_codes::INVALID_REQUEST;

pub const SASL_HANDSHAKE_KEY: i16 = 17;
pub const SASL_AUTHENTICATE_KEY: i16 = 36;

/// The `PLAIN` SASL mechanism name as it appears on the wire.
pub const PLAIN_MECHANISM: &str = "PLAIN";

pub fn encode_request_header(
    api_key: i16,
    api_version: i16,
    correlation_id: i32,
    client_id: &str,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10 + client_id.len());
    buf.extend_from_slice(&api_key.to_be_bytes());
    buf.extend_from_slice(&api_version.to_be_bytes());
    buf.extend_from_slice(&correlation_id.to_be_bytes());
    write_string(&mut buf, Some(client_id));
    buf
}

pub fn encode_response_header(correlation_id: i32) -> Vec<u8> {
    correlation_id.to_be_bytes().to_vec()
}

pub struct SaslHandshakeRequestBody {
    pub mechanism: String,
}

impl SaslHandshakeRequestBody {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        write_string(&mut buf, Some(&self.mechanism));
        buf
    }

    pub fn decode(raw: &[u8]) -> KafkaResult<Self> {
        let mut cursor = raw;
        let mechanism = read_string(&mut cursor)?.ok_or_else(|| malformed("null mechanism"))?;
        Ok(Self { mechanism })
    }
}

pub struct SaslHandshakeResponseBody {
    pub error_code: i16,
    pub mechanisms: Vec<String>,
}

impl SaslHandshakeResponseBody {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.error_code.to_be_bytes());
        buf.extend_from_slice(&(self.mechanisms.len() as i32).to_be_bytes());
        for m in &self.mechanisms {
            write_string(&mut buf, Some(m));
        }
        buf
    }

    pub fn decode(raw: &[u8]) -> KafkaResult<Self> {
        let mut cursor = raw;
        if cursor.len() < 2 {
            return Err(malformed("handshake response too short"));
        }
        let error_code = i16::from_be_bytes([cursor[0], cursor[1]]);
        cursor = &cursor[2..];
        if cursor.len() < 4 {
            return Err(malformed("handshake response missing mechanisms array"));
        }
        let count = i32::from_be_bytes([cursor[0], cursor[1], cursor[2], cursor[3]]).max(0);
        cursor = &cursor[4..];
        let mut mechanisms = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let m = read_string(&mut cursor)?.unwrap_or_default();
            mechanisms.push(m);
        }
        Ok(Self {
            error_code,
            mechanisms,
        })
    }
}

pub struct SaslAuthenticateRequestBody {
    pub auth_bytes: Vec<u8>,
}

impl SaslAuthenticateRequestBody {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(4 + self.auth_bytes.len());
        buf.extend_from_slice(&(self.auth_bytes.len() as i32).to_be_bytes());
        buf.extend_from_slice(&self.auth_bytes);
        buf
    }

    pub fn decode(raw: &[u8]) -> KafkaResult<Self> {
        let mut cursor = raw;
        let auth_bytes = read_bytes(&mut cursor)?;
        Ok(Self { auth_bytes })
    }
}

pub struct SaslAuthenticateResponseBody {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub auth_bytes: Vec<u8>,
}

impl SaslAuthenticateResponseBody {
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.error_code.to_be_bytes());
        write_string(&mut buf, self.error_message.as_deref());
        buf.extend_from_slice(&(self.auth_bytes.len() as i32).to_be_bytes());
        buf.extend_from_slice(&self.auth_bytes);
        buf
    }

    pub fn decode(raw: &[u8]) -> KafkaResult<Self> {
        let mut cursor = raw;
        if cursor.len() < 2 {
            return Err(malformed("authenticate response too short"));
        }
        let error_code = i16::from_be_bytes([cursor[0], cursor[1]]);
        cursor = &cursor[2..];
        let error_message = read_string(&mut cursor)?;
        let auth_bytes = read_bytes(&mut cursor)?;
        Ok(Self {
            error_code,
            error_message,
            auth_bytes,
        })
    }
}

/// Encodes a PLAIN SASL message: `\0username\0password`.
pub fn encode_plain_credentials(user: &str, pass: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(user.len() + pass.len() + 2);
    buf.push(0);
    buf.extend_from_slice(user.as_bytes());
    buf.push(0);
    buf.extend_from_slice(pass.as_bytes());
    buf
}

/// Parses a PLAIN SASL message of the form `[authzid]\0username\0password`.
pub fn parse_plain_credentials(bytes: &[u8]) -> KafkaResult<(String, String)> {
    let parts: Vec<&[u8]> = bytes.split(|&b| b == 0).collect();
    if parts.len() != 3 {
        return Err(malformed("PLAIN payload must have exactly two NUL separators"));
    }
    let user = std::str::from_utf8(parts[1])
        .map_err(|_| malformed("PLAIN username is not valid UTF-8"))?
        .to_string();
    let pass = std::str::from_utf8(parts[2])
        .map_err(|_| malformed("PLAIN password is not valid UTF-8"))?
        .to_string();
    Ok((user, pass))
}

fn write_string(out: &mut Vec<u8>, value: Option<&str>) {
    match value {
        Some(s) => {
            out.extend_from_slice(&(s.len() as i16).to_be_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        None => out.extend_from_slice(&(-1i16).to_be_bytes()),
    }
}

fn read_string(cursor: &mut &[u8]) -> KafkaResult<Option<String>> {
    if cursor.len() < 2 {
        return Err(malformed("truncated string length"));
    }
    let len = i16::from_be_bytes([cursor[0], cursor[1]]);
    *cursor = &cursor[2..];
    if len < 0 {
        return Ok(None);
    }
    let len = len as usize;
    if cursor.len() < len {
        return Err(malformed("truncated string body"));
    }
    let s = std::str::from_utf8(&cursor[..len])
        .map_err(|_| malformed("string is not valid UTF-8"))?
        .to_string();
    *cursor = &cursor[len..];
    Ok(Some(s))
}

fn read_bytes(cursor: &mut &[u8]) -> KafkaResult<Vec<u8>> {
    if cursor.len() < 4 {
        return Err(malformed("truncated bytes length"));
    }
    let len = i32::from_be_bytes([cursor[0], cursor[1], cursor[2], cursor[3]]);
    *cursor = &cursor[4..];
    if len < 0 {
        return Ok(Vec::new());
    }
    let len = len as usize;
    if cursor.len() < len {
        return Err(malformed("truncated bytes body"));
    }
    let out = cursor[..len].to_vec();
    *cursor = &cursor[len..];
    Ok(out)
}

fn malformed(reason: &str) -> KafkaBrokerError {
    KafkaBrokerError::MalformedRequest {
        code: INVALID_REQUEST,
        reason: reason.to_string(),
    }
}
