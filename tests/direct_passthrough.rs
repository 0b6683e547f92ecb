//! Scenario 1 (spec §8): a request whose `api_key` is not forbidden and
//! not address-bearing passes through byte-for-byte in both directions.

mod common;

use std::sync::Arc;
use std::time::Duration;

use kafka_proxy_rs::collaborators::Conn;
use kafka_proxy_rs::handler;
use kafka_proxy_rs::kafka_protocol::frame::{self, BufferPool};
use kafka_proxy_rs::kafka_protocol::sasl::{encode_request_header, encode_response_header};
use kafka_proxy_rs::registry::ConnSet;

const API_VERSIONS_KEY: i16 = 18;

#[tokio::test]
async fn api_versions_request_and_response_forward_unchanged() {
    let (client, downstream_server) = common::downstream_pair().await;
    let (broker_addr, broker_listener) = common::fake_broker().await;

    let request = {
        let mut body = encode_request_header(API_VERSIONS_KEY, 3, 42, "test-client");
        body.extend_from_slice(&[0xAA, 0xBB, 0xCC]); // opaque request payload
        body
    };
    let response = {
        let mut body = encode_response_header(42);
        body.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]); // opaque response payload
        body
    };

    let expected_request = request.clone();
    let expected_response = response.clone();

    let broker_task = tokio::spawn(async move {
        let (mut broker_conn, _) = broker_listener.accept().await.unwrap();
        let pool = BufferPool::new(65536);
        let received = frame::read_frame(&mut broker_conn, &pool, None).await.unwrap().unwrap();
        assert_eq!(&received[..], &expected_request[..]);
        frame::write_frame(&mut broker_conn, &response, None).await.unwrap();
    });

    let conn = Conn {
        broker_address: (broker_addr.ip().to_string(), broker_addr.port()),
        downstream_stream: downstream_server,
    };
    let dialer = Arc::new(common::direct_dialer(Duration::from_secs(2)));
    let config = Arc::new(common::base_handler_config());
    let collaborators = Arc::new(common::identity_collaborators());
    let conn_set = ConnSet::new();

    let handler_task = tokio::spawn(handler::handle_connection(conn, dialer, config, collaborators, conn_set));

    let mut client = client;
    let pool = BufferPool::new(65536);
    frame::write_frame(&mut client, &request, None).await.unwrap();
    let received = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    assert_eq!(&received[..], &expected_response[..]);

    drop(client);
    broker_task.await.unwrap();
    let _ = tokio::time::timeout(Duration::from_secs(1), handler_task).await;
}
