//! Response header parsing.
//!
//! Kafka responses carry only a `correlation_id`, never the API key or
//! version — that is exactly why the proxy needs the correlation table
//! (spec §4.4): the response alone cannot tell us which schema to apply.

use crate::kafka_protocol::kafka_error::{KafkaBrokerError, KafkaResult};
use crate::kafka_protocol::kafka_error_codes::INVALID_REQUEST;

#[derive(Debug, Clone, Copy)]
pub struct ResponseHeader {
    pub correlation_id: i32,
}

impl ResponseHeader {
    /// `correlation_id` sits in the same place (the first 4 bytes of the
    /// frame body) whether the response header is flexible or not — only
    /// the trailing tagged-fields section differs, and we never need it.
    pub fn parse(raw: &[u8]) -> KafkaResult<Self> {
        if raw.len() < 4 {
            return Err(KafkaBrokerError::MalformedRequest {
                code: INVALID_REQUEST,
                reason: format!("response header requires 4 bytes, got {}", raw.len()),
            });
        }
        let correlation_id = i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        Ok(ResponseHeader { correlation_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_correlation_id() {
        let raw = 42i32.to_be_bytes();
        let header = ResponseHeader::parse(&raw).unwrap();
        assert_eq!(header.correlation_id, 42);
    }
}
