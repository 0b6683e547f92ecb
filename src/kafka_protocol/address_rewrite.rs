//! Address-rewriting response filter (spec §4.4).
//!
//! Walks the subset of the Metadata/FindCoordinator/DescribeCluster response
//! schemas needed to locate every advertised broker `(host, port)` pair,
//! calls the caller's [`AddressMapper`](crate::collaborators::AddressMapper)
//! on each, and re-encodes just those fields. Everything the walker does not
//! need to understand (topic metadata, ACL bits, whatever comes next) is
//! copied through byte-for-byte from wherever the walker's cursor stopped,
//! which is what keeps this module to "the subset of schemas actually used"
//! rather than a full protocol implementation (see Design Note, spec §9).
//!
//! Supported version matrix: Metadata v0-v9, FindCoordinator v0-v4,
//! DescribeCluster v0-v2. Anything else for these three keys, or any other
//! `api_key`, is left for the caller to forward unchanged.

use crate::collaborators::AddressMapper;
use crate::kafka_protocol::kafka_error::{KafkaBrokerError, KafkaResult};
use crate::kafka_protocol::kafka_error_codes::INVALID_REQUEST;
use crate::kafka_protocol::varint::{read_unsigned_varint, write_unsigned_varint};

const METADATA_KEY: i16 = 3;
const FIND_COORDINATOR_KEY: i16 = 10;
const DESCRIBE_CLUSTER_KEY: i16 = 60;

/// Does this `api_key` ever carry broker addresses? Cheap pre-check so the
/// response pump can skip the rewrite path entirely for the common case.
pub fn is_address_bearing(api_key: i16) -> bool {
    matches!(
        api_key,
        METADATA_KEY | FIND_COORDINATOR_KEY | DESCRIBE_CLUSTER_KEY
    )
}

fn response_header_is_flexible(api_key: i16, api_version: i16) -> bool {
    match api_key {
        METADATA_KEY => api_version >= 9,
        FIND_COORDINATOR_KEY => api_version >= 3,
        DESCRIBE_CLUSTER_KEY => true,
        _ => false,
    }
}

fn version_supported(api_key: i16, api_version: i16) -> bool {
    match api_key {
        METADATA_KEY => (0..=9).contains(&api_version),
        FIND_COORDINATOR_KEY => (0..=4).contains(&api_version),
        DESCRIBE_CLUSTER_KEY => (0..=2).contains(&api_version),
        _ => false,
    }
}

/// Rewrites `body` (the full response frame body, header included) in
/// place of broker endpoints. Returns `None` when `api_key`/`api_version`
/// is not one this module claims to support — the caller should forward
/// the original bytes unchanged and log the unhandled version.
pub fn rewrite(
    api_key: i16,
    api_version: i16,
    body: &[u8],
    mapper: &AddressMapper,
) -> KafkaResult<Option<Vec<u8>>> {
    if !is_address_bearing(api_key) || !version_supported(api_key, api_version) {
        return Ok(None);
    }

    let flexible_header = response_header_is_flexible(api_key, api_version);
    let mut cursor = body;
    let mut out = Vec::with_capacity(body.len());

    // correlation_id
    copy_bytes(&mut cursor, &mut out, 4)?;
    if flexible_header {
        copy_tagged_fields(&mut cursor, &mut out)?;
    }

    match api_key {
        METADATA_KEY => rewrite_metadata(&mut cursor, api_version, mapper, &mut out)?,
        FIND_COORDINATOR_KEY => rewrite_find_coordinator(&mut cursor, api_version, mapper, &mut out)?,
        DESCRIBE_CLUSTER_KEY => rewrite_describe_cluster(&mut cursor, api_version, mapper, &mut out)?,
        _ => unreachable!("checked by is_address_bearing"),
    }

    // Whatever the per-API walker did not need to touch.
    out.extend_from_slice(cursor);

    Ok(Some(out))
}

fn flexible_for_payload(api_key: i16, api_version: i16) -> bool {
    match api_key {
        METADATA_KEY => api_version >= 9,
        FIND_COORDINATOR_KEY => api_version >= 3,
        DESCRIBE_CLUSTER_KEY => true,
        _ => false,
    }
}

fn rewrite_metadata(
    cursor: &mut &[u8],
    api_version: i16,
    mapper: &AddressMapper,
    out: &mut Vec<u8>,
) -> KafkaResult<()> {
    let flexible = flexible_for_payload(METADATA_KEY, api_version);

    if api_version >= 3 {
        copy_bytes(cursor, out, 4)?; // throttle_time_ms
    }

    let count = read_array_len(cursor, out, flexible)?;
    for _ in 0..count {
        copy_bytes(cursor, out, 4)?; // node_id
        let host = read_str(cursor, flexible)?;
        let port = read_i32(cursor)?;
        write_rewritten_endpoint(out, host, port, mapper, flexible);

        if api_version >= 1 {
            let rack = read_str(cursor, flexible)?;
            write_str(out, rack.as_deref(), flexible);
        }

        if flexible {
            copy_tagged_fields(cursor, out)?;
        }
    }

    Ok(())
}

fn rewrite_find_coordinator(
    cursor: &mut &[u8],
    api_version: i16,
    mapper: &AddressMapper,
    out: &mut Vec<u8>,
) -> KafkaResult<()> {
    let flexible = flexible_for_payload(FIND_COORDINATOR_KEY, api_version);

    if api_version >= 1 {
        copy_bytes(cursor, out, 4)?; // throttle_time_ms
    }

    if api_version < 4 {
        copy_bytes(cursor, out, 2)?; // error_code
        if api_version >= 1 {
            let msg = read_str(cursor, flexible)?;
            write_str(out, msg.as_deref(), flexible);
        }
        copy_bytes(cursor, out, 4)?; // node_id
        let host = read_str(cursor, flexible)?;
        let port = read_i32(cursor)?;
        write_rewritten_endpoint(out, host, port, mapper, flexible);
        if flexible {
            copy_tagged_fields(cursor, out)?;
        }
        return Ok(());
    }

    // v4: batched `coordinators` array.
    let count = read_array_len(cursor, out, flexible)?;
    for _ in 0..count {
        let key = read_str(cursor, flexible)?;
        write_str(out, key.as_deref(), flexible);
        copy_bytes(cursor, out, 4)?; // node_id
        let host = read_str(cursor, flexible)?;
        let port = read_i32(cursor)?;
        write_rewritten_endpoint(out, host, port, mapper, flexible);
        copy_bytes(cursor, out, 2)?; // error_code
        let msg = read_str(cursor, flexible)?;
        write_str(out, msg.as_deref(), flexible);
        copy_tagged_fields(cursor, out)?;
    }

    Ok(())
}

fn rewrite_describe_cluster(
    cursor: &mut &[u8],
    api_version: i16,
    mapper: &AddressMapper,
    out: &mut Vec<u8>,
) -> KafkaResult<()> {
    let flexible = true;

    copy_bytes(cursor, out, 4)?; // throttle_time_ms
    copy_bytes(cursor, out, 2)?; // error_code
    let msg = read_str(cursor, flexible)?;
    write_str(out, msg.as_deref(), flexible);

    if api_version >= 1 {
        copy_bytes(cursor, out, 1)?; // endpoint_type
    }

    let cluster_id = read_str(cursor, flexible)?;
    write_str(out, cluster_id.as_deref(), flexible);
    copy_bytes(cursor, out, 4)?; // controller_id

    let count = read_array_len(cursor, out, flexible)?;
    for _ in 0..count {
        copy_bytes(cursor, out, 4)?; // broker_id
        let host = read_str(cursor, flexible)?;
        let port = read_i32(cursor)?;
        write_rewritten_endpoint(out, host, port, mapper, flexible);
        let rack = read_str(cursor, flexible)?;
        write_str(out, rack.as_deref(), flexible);
        copy_tagged_fields(cursor, out)?;
    }

    Ok(())
}

fn write_rewritten_endpoint(
    out: &mut Vec<u8>,
    host: Option<String>,
    port: i32,
    mapper: &AddressMapper,
    flexible: bool,
) {
    match host {
        Some(host) => {
            let (new_host, new_port) = mapper(&host, port as u16);
            write_str(out, Some(new_host.as_str()), flexible);
            out.extend_from_slice(&(new_port as i32).to_be_bytes());
        }
        None => {
            write_str(out, None, flexible);
            out.extend_from_slice(&port.to_be_bytes());
        }
    }
}

fn read_i32(cursor: &mut &[u8]) -> KafkaResult<i32> {
    if cursor.len() < 4 {
        return Err(too_short());
    }
    let v = i32::from_be_bytes([cursor[0], cursor[1], cursor[2], cursor[3]]);
    *cursor = &cursor[4..];
    Ok(v)
}

fn copy_bytes(cursor: &mut &[u8], out: &mut Vec<u8>, n: usize) -> KafkaResult<()> {
    if cursor.len() < n {
        return Err(too_short());
    }
    out.extend_from_slice(&cursor[..n]);
    *cursor = &cursor[n..];
    Ok(())
}

fn read_array_len(cursor: &mut &[u8], out: &mut Vec<u8>, flexible: bool) -> KafkaResult<u32> {
    if flexible {
        let (len_plus1, consumed) = read_unsigned_varint(cursor).ok_or_else(too_short)?;
        let mut buf = Vec::new();
        write_unsigned_varint(len_plus1, &mut buf);
        out.extend_from_slice(&buf);
        *cursor = &cursor[consumed..];
        Ok(len_plus1.saturating_sub(1))
    } else {
        let len = read_i32(cursor)?;
        out.extend_from_slice(&len.to_be_bytes());
        Ok(len.max(0) as u32)
    }
}

fn read_str(cursor: &mut &[u8], flexible: bool) -> KafkaResult<Option<String>> {
    if flexible {
        let (len_plus1, consumed) = read_unsigned_varint(cursor).ok_or_else(too_short)?;
        *cursor = &cursor[consumed..];
        if len_plus1 == 0 {
            return Ok(None);
        }
        let len = (len_plus1 - 1) as usize;
        if cursor.len() < len {
            return Err(too_short());
        }
        let s = std::str::from_utf8(&cursor[..len])
            .map_err(|_| invalid("non-utf8 compact string"))?
            .to_string();
        *cursor = &cursor[len..];
        Ok(Some(s))
    } else {
        if cursor.len() < 2 {
            return Err(too_short());
        }
        let len = i16::from_be_bytes([cursor[0], cursor[1]]);
        *cursor = &cursor[2..];
        if len < 0 {
            return Ok(None);
        }
        let len = len as usize;
        if cursor.len() < len {
            return Err(too_short());
        }
        let s = std::str::from_utf8(&cursor[..len])
            .map_err(|_| invalid("non-utf8 string"))?
            .to_string();
        *cursor = &cursor[len..];
        Ok(Some(s))
    }
}

fn write_str(out: &mut Vec<u8>, value: Option<&str>, flexible: bool) {
    if flexible {
        match value {
            Some(s) => {
                write_unsigned_varint(s.len() as u32 + 1, out);
                out.extend_from_slice(s.as_bytes());
            }
            None => write_unsigned_varint(0, out),
        }
    } else {
        match value {
            Some(s) => {
                out.extend_from_slice(&(s.len() as i16).to_be_bytes());
                out.extend_from_slice(s.as_bytes());
            }
            None => out.extend_from_slice(&(-1i16).to_be_bytes()),
        }
    }
}

fn copy_tagged_fields(cursor: &mut &[u8], out: &mut Vec<u8>) -> KafkaResult<()> {
    let consumed =
        crate::kafka_protocol::varint::skip_tagged_fields(cursor).ok_or_else(too_short)?;
    out.extend_from_slice(&cursor[..consumed]);
    *cursor = &cursor[consumed..];
    Ok(())
}

fn too_short() -> KafkaBrokerError {
    KafkaBrokerError::MalformedRequest {
        code: INVALID_REQUEST,
        reason: "address-bearing response ended before the schema said it should".to_string(),
    }
}

fn invalid(reason: &str) -> KafkaBrokerError {
    KafkaBrokerError::MalformedRequest {
        code: INVALID_REQUEST,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn identity_mapper() -> AddressMapper {
        Arc::new(|host: &str, port: u16| (host.to_string(), port))
    }

    fn edge_mapper() -> AddressMapper {
        Arc::new(|_host: &str, _port: u16| ("edge.example.com".to_string(), 19092))
    }

    /// Builds a minimal non-flexible Metadata v1 response: correlation_id,
    /// one broker (node_id, host, port, rack=null).
    fn build_metadata_v1(host: &str, port: i32) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&7i32.to_be_bytes()); // correlation_id
        buf.extend_from_slice(&1i32.to_be_bytes()); // brokers array len
        buf.extend_from_slice(&0i32.to_be_bytes()); // node_id
        buf.extend_from_slice(&(host.len() as i16).to_be_bytes());
        buf.extend_from_slice(host.as_bytes());
        buf.extend_from_slice(&port.to_be_bytes());
        buf.extend_from_slice(&(-1i16).to_be_bytes()); // rack = null
        buf.extend_from_slice(&(-1i32).to_be_bytes()); // controller_id (tail, untouched)
        buf
    }

    #[test]
    fn rewrites_metadata_v1_broker_endpoint() {
        let body = build_metadata_v1("kafka-1.internal", 9092);
        let mapper = edge_mapper();
        let rewritten = rewrite(METADATA_KEY, 1, &body, &mapper).unwrap().unwrap();

        // tail (controller_id) survives untouched
        assert_eq!(&rewritten[rewritten.len() - 4..], &(-1i32).to_be_bytes());

        let mut cursor = &rewritten[..];
        let header = crate::kafka_protocol::response_header::ResponseHeader::parse(cursor).unwrap();
        assert_eq!(header.correlation_id, 7);
        cursor = &cursor[4..];
        let _count = read_array_len(&mut cursor, &mut Vec::new(), false).unwrap();
        let _node_id = read_i32(&mut cursor).unwrap();
        let host = read_str(&mut cursor, false).unwrap().unwrap();
        let port = read_i32(&mut cursor).unwrap();
        assert_eq!(host, "edge.example.com");
        assert_eq!(port, 19092);
    }

    #[test]
    fn identity_mapping_is_idempotent() {
        let body = build_metadata_v1("kafka-1.internal", 9092);
        let mapper = identity_mapper();
        let once = rewrite(METADATA_KEY, 1, &body, &mapper).unwrap().unwrap();
        let twice = rewrite(METADATA_KEY, 1, &once, &mapper).unwrap().unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, body);
    }

    #[test]
    fn unsupported_version_is_not_rewritten() {
        let body = build_metadata_v1("kafka-1.internal", 9092);
        let mapper = edge_mapper();
        assert!(rewrite(METADATA_KEY, 42, &body, &mapper).unwrap().is_none());
    }

    #[test]
    fn non_address_bearing_key_is_not_rewritten() {
        let body = vec![0, 0, 0, 7];
        let mapper = edge_mapper();
        assert!(rewrite(18, 3, &body, &mapper).unwrap().is_none());
    }
}
