//! Bounded in-flight property (spec §8): the request pump blocks once
//! the correlation table is at capacity, and never exceeds it, driven
//! directly at the pump level so the test controls exactly when a slot
//! frees up.

use std::sync::Arc;
use std::time::Duration;

use kafka_proxy_rs::correlation::CorrelationTable;
use kafka_proxy_rs::kafka_protocol::frame::{self, BufferPool};
use kafka_proxy_rs::kafka_protocol::sasl::encode_request_header;
use kafka_proxy_rs::metrics::NoopMetrics;
use kafka_proxy_rs::pumps::{self, PumpConfig};

const API_VERSIONS_KEY: i16 = 18;

#[tokio::test]
async fn request_pump_blocks_once_the_table_is_full() {
    let (mut client, mut downstream) = tokio::io::duplex(65536);
    let (mut upstream, mut broker) = tokio::io::duplex(65536);

    let table = Arc::new(CorrelationTable::new(1));
    let config = PumpConfig {
        request_buf_size: 65536,
        response_buf_size: 65536,
        forbidden_api_keys: Default::default(),
    };

    let pump_table = table.clone();
    tokio::spawn(async move {
        let _ = pumps::request_pump(&mut downstream, &mut upstream, &pump_table, &config, &NoopMetrics).await;
    });

    let req1 = encode_request_header(API_VERSIONS_KEY, 3, 1, "client");
    let req2 = encode_request_header(API_VERSIONS_KEY, 3, 2, "client");
    frame::write_frame(&mut client, &req1, None).await.unwrap();
    frame::write_frame(&mut client, &req2, None).await.unwrap();

    let pool = BufferPool::new(65536);
    let forwarded_first = tokio::time::timeout(Duration::from_millis(500), frame::read_frame(&mut broker, &pool, None))
        .await
        .expect("first request should forward promptly")
        .unwrap()
        .unwrap();
    assert_eq!(&forwarded_first[..], &req1[..]);
    assert_eq!(table.in_flight(), 1);

    let blocked = tokio::time::timeout(Duration::from_millis(200), frame::read_frame(&mut broker, &pool, None)).await;
    assert!(
        blocked.is_err(),
        "second request should not forward while the single correlation slot is held"
    );
    assert_eq!(table.in_flight(), 1, "table must never exceed max_open_requests");

    // Freeing the slot (as the response pump would on a matching reply)
    // unblocks the pump and the second request forwards.
    table.remove(1);
    let forwarded_second = tokio::time::timeout(Duration::from_millis(500), frame::read_frame(&mut broker, &pool, None))
        .await
        .expect("second request should forward once a slot frees up")
        .unwrap()
        .unwrap();
    assert_eq!(&forwarded_second[..], &req2[..]);
}
