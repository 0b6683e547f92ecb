//! Request header parsing.
//!
//! Every Kafka request header, regardless of version, opens with the same
//! three fixed fields: `api_key` (i16), `api_version` (i16), `correlation_id`
//! (i32). What follows — a nullable `client_id` string, and for flexible
//! versions a tagged-fields section — differs by API and version, but none
//! of it gates proxy behavior (routing only needs the three fixed fields),
//! so `client_id` is parsed best-effort: a failure there does not fail the
//! whole header, it just leaves `client_id` as `None`.

use crate::kafka_protocol::kafka_error::{KafkaBrokerError, KafkaResult};
use crate::kafka_protocol::kafka_error_codes::INVALID_REQUEST;

/// The fields the proxy actually relies on, plus a best-effort `client_id`.
#[derive(Debug, Clone)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
    pub client_id: Option<String>,
    /// Bytes of the frame body this header consumed. Only meaningful when
    /// `client_id` parsed successfully (non-flexible `v1`-shaped header,
    /// which is all this proxy ever constructs itself, for SASL/gateway
    /// framing); callers forwarding arbitrary client traffic verbatim never
    /// need to slice past it.
    pub header_len: usize,
}

impl RequestHeader {
    /// Parses the header from the start of a request frame body.
    ///
    /// Requires at least 8 bytes for the fixed fields; anything else is a
    /// best-effort nullable-string read that is allowed to come back `None`.
    pub fn parse(raw: &[u8]) -> KafkaResult<Self> {
        if raw.len() < 8 {
            return Err(KafkaBrokerError::MalformedRequest {
                code: INVALID_REQUEST,
                reason: format!("request header requires 8 bytes, got {}", raw.len()),
            });
        }

        let api_key = i16::from_be_bytes([raw[0], raw[1]]);
        let api_version = i16::from_be_bytes([raw[2], raw[3]]);
        let correlation_id = i32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]]);

        let (client_id, client_id_len) = parse_client_id_best_effort(&raw[8..]);

        Ok(RequestHeader {
            api_key,
            api_version,
            correlation_id,
            client_id,
            header_len: 8 + client_id_len,
        })
    }
}

/// Reads a non-flexible nullable string (`i16` length, `-1` = null) if the
/// remaining bytes look like one. Returns `(None, 0)` rather than erroring
/// on any inconsistency, since `client_id` is informational only.
fn parse_client_id_best_effort(rest: &[u8]) -> (Option<String>, usize) {
    if rest.len() < 2 {
        return (None, 0);
    }
    let len = i16::from_be_bytes([rest[0], rest[1]]);
    if len < 0 {
        return (None, 2);
    }
    let len = len as usize;
    match rest.get(2..2 + len) {
        Some(body) => match std::str::from_utf8(body) {
            Ok(s) => (Some(s.to_string()), 2 + len),
            Err(_) => (None, 0),
        },
        None => (None, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_v1(api_key: i16, api_version: i16, correlation_id: i32, client_id: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&api_key.to_be_bytes());
        buf.extend_from_slice(&api_version.to_be_bytes());
        buf.extend_from_slice(&correlation_id.to_be_bytes());
        buf.extend_from_slice(&(client_id.len() as i16).to_be_bytes());
        buf.extend_from_slice(client_id.as_bytes());
        buf
    }

    #[test]
    fn parses_fixed_fields_and_client_id() {
        let raw = encode_v1(18, 3, 42, "my-client");
        let header = RequestHeader::parse(&raw).unwrap();
        assert_eq!(header.api_key, 18);
        assert_eq!(header.api_version, 3);
        assert_eq!(header.correlation_id, 42);
        assert_eq!(header.client_id.as_deref(), Some("my-client"));
    }

    #[test]
    fn tolerates_garbage_after_fixed_fields() {
        let mut raw = vec![0, 3, 0, 9, 0, 0, 0, 42];
        raw.extend_from_slice(&[0xff, 0xff, 0xff]);
        let header = RequestHeader::parse(&raw).unwrap();
        assert_eq!(header.api_key, 3);
        assert_eq!(header.client_id, None);
    }

    #[test]
    fn rejects_too_short_header() {
        let raw = [0u8, 1, 2];
        let err = RequestHeader::parse(&raw).unwrap_err();
        assert!(matches!(err, KafkaBrokerError::MalformedRequest { .. }));
    }
}
