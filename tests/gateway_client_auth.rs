//! Scenario 6 (spec §8): the upstream gateway-client handshake presents
//! a token minted by the injected `TokenProvider` before any Kafka bytes
//! cross the wire; a zero status lets the connection proceed.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kafka_proxy_rs::auth::gateway_client::GatewayClientConfig;
use kafka_proxy_rs::auth::gateway_frame::{self, AuthReply};
use kafka_proxy_rs::collaborators::{Conn, TokenInfo, TokenProvider};
use kafka_proxy_rs::config::HandlerConfig;
use kafka_proxy_rs::handler::{self, HandlerCollaborators};
use kafka_proxy_rs::kafka_protocol::frame::{self, BufferPool};
use kafka_proxy_rs::kafka_protocol::sasl;
use kafka_proxy_rs::registry::ConnSet;

const API_VERSIONS_KEY: i16 = 18;
const MAGIC: u64 = 0xC0FF_EE00_DEAD_BEEF;
const METHOD: &str = "bearer-v1";

struct StaticProvider(&'static str);
#[async_trait]
impl TokenProvider for StaticProvider {
    async fn get_token(&self, _method: &str) -> anyhow::Result<TokenInfo> {
        Ok(TokenInfo {
            token: self.0.to_string(),
        })
    }
}

#[tokio::test]
async fn token_is_presented_before_kafka_traffic_and_proceeds_on_zero_status() {
    let (mut client, downstream_server) = common::downstream_pair().await;
    let (broker_addr, broker_listener) = common::fake_broker().await;

    let api_versions_request = sasl::encode_request_header(API_VERSIONS_KEY, 3, 5, "test-client");
    let api_versions_response = sasl::encode_response_header(5);

    let expected_request = api_versions_request.clone();
    let expected_response = api_versions_response.clone();
    let broker_task = tokio::spawn(async move {
        let (mut broker_conn, _) = broker_listener.accept().await.unwrap();

        let gateway_frame = gateway_frame::read_frame(&mut broker_conn).await.unwrap();
        assert_eq!(gateway_frame.magic, MAGIC);
        assert_eq!(gateway_frame.method, METHOD);
        assert_eq!(gateway_frame.token, "minted-token");
        gateway_frame::write_reply(&mut broker_conn, &AuthReply { status: 0, error: String::new() })
            .await
            .unwrap();

        let pool = BufferPool::new(65536);
        let received = frame::read_frame(&mut broker_conn, &pool, None).await.unwrap().unwrap();
        assert_eq!(&received[..], &expected_request[..]);
        frame::write_frame(&mut broker_conn, &expected_response, None).await.unwrap();
    });

    let conn = Conn {
        broker_address: (broker_addr.ip().to_string(), broker_addr.port()),
        downstream_stream: downstream_server,
    };
    let dialer = Arc::new(common::direct_dialer(Duration::from_secs(2)));
    let mut config = common::base_handler_config();
    config.gateway_client = Some(GatewayClientConfig {
        magic: MAGIC,
        method: METHOD.to_string(),
        timeout: Duration::from_secs(1),
    });
    let config: Arc<HandlerConfig> = Arc::new(config);
    let collaborators = Arc::new(HandlerCollaborators {
        token_provider: Arc::new(StaticProvider("minted-token")),
        ..common::identity_collaborators()
    });
    let conn_set = ConnSet::new();

    let handler_task = tokio::spawn(handler::handle_connection(conn, dialer, config, collaborators, conn_set));

    frame::write_frame(&mut client, &api_versions_request, None).await.unwrap();
    let pool = BufferPool::new(65536);
    let received = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    assert_eq!(&received[..], &api_versions_response[..]);

    drop(client);
    broker_task.await.unwrap();
    let _ = tokio::time::timeout(Duration::from_secs(1), handler_task).await;
}
