//! Scenarios 4 and 5 (spec §8): local SASL PLAIN gates the pumps. A
//! successful handshake lets ordinary frames through afterward; a
//! rejected one closes the connection without ever dialing through to
//! ordinary traffic.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use kafka_proxy_rs::auth::local_sasl_server::LocalSaslConfig;
use kafka_proxy_rs::collaborators::{AuthOutcome, Conn, PasswordAuthenticator};
use kafka_proxy_rs::config::HandlerConfig;
use kafka_proxy_rs::handler::{self, HandlerCollaborators};
use kafka_proxy_rs::kafka_protocol::frame::{self, BufferPool};
use kafka_proxy_rs::kafka_protocol::sasl::{
    self, encode_plain_credentials, SaslAuthenticateRequestBody, SaslAuthenticateResponseBody,
    SaslHandshakeRequestBody, SaslHandshakeResponseBody, PLAIN_MECHANISM, SASL_AUTHENTICATE_KEY, SASL_HANDSHAKE_KEY,
};
use kafka_proxy_rs::registry::ConnSet;

const API_VERSIONS_KEY: i16 = 18;

struct Accepts(&'static str, &'static str);
#[async_trait]
impl PasswordAuthenticator for Accepts {
    async fn authenticate(&self, user: &str, pass: &str) -> anyhow::Result<AuthOutcome> {
        Ok(if user == self.0 && pass == self.1 {
            AuthOutcome::Ok
        } else {
            AuthOutcome::Denied
        })
    }
}

fn handshake_request(correlation_id: i32) -> Vec<u8> {
    let mut body = sasl::encode_request_header(SASL_HANDSHAKE_KEY, 1, correlation_id, "test-client");
    body.extend_from_slice(
        &SaslHandshakeRequestBody {
            mechanism: PLAIN_MECHANISM.to_string(),
        }
        .encode(),
    );
    body
}

fn authenticate_request(correlation_id: i32, user: &str, pass: &str) -> Vec<u8> {
    let mut body = sasl::encode_request_header(SASL_AUTHENTICATE_KEY, 1, correlation_id, "test-client");
    body.extend_from_slice(
        &SaslAuthenticateRequestBody {
            auth_bytes: encode_plain_credentials(user, pass),
        }
        .encode(),
    );
    body
}

async fn config_with_local_sasl() -> Arc<HandlerConfig> {
    let mut config = common::base_handler_config();
    config.local_sasl = Some(LocalSaslConfig {
        timeout: Duration::from_secs(1),
    });
    Arc::new(config)
}

#[tokio::test]
async fn successful_handshake_admits_ordinary_traffic_afterward() {
    let (mut client, downstream_server) = common::downstream_pair().await;
    let (broker_addr, broker_listener) = common::fake_broker().await;

    let api_versions_request = sasl::encode_request_header(API_VERSIONS_KEY, 3, 99, "test-client");
    let api_versions_response = sasl::encode_response_header(99);

    let expected_request = api_versions_request.clone();
    let expected_response = api_versions_response.clone();
    let broker_task = tokio::spawn(async move {
        let (mut broker_conn, _) = broker_listener.accept().await.unwrap();
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
    let config = config_with_local_sasl().await;
    let collaborators = Arc::new(HandlerCollaborators {
        password_authenticator: Arc::new(Accepts("alice", "secret")),
        ..common::identity_collaborators()
    });
    let conn_set = ConnSet::new();

    let handler_task = tokio::spawn(handler::handle_connection(conn, dialer, config, collaborators, conn_set));

    let pool = BufferPool::new(65536);
    frame::write_frame(&mut client, &handshake_request(1), None).await.unwrap();
    let handshake_reply = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    let decoded = SaslHandshakeResponseBody::decode(&handshake_reply[4..]).unwrap();
    assert_eq!(decoded.error_code, 0);

    frame::write_frame(&mut client, &authenticate_request(2, "alice", "secret"), None)
        .await
        .unwrap();
    let auth_reply = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    let decoded = SaslAuthenticateResponseBody::decode(&auth_reply[4..]).unwrap();
    assert_eq!(decoded.error_code, 0);

    frame::write_frame(&mut client, &api_versions_request, None).await.unwrap();
    let received = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    assert_eq!(&received[..], &api_versions_response[..]);

    drop(client);
    broker_task.await.unwrap();
    let _ = tokio::time::timeout(Duration::from_secs(1), handler_task).await;
}

#[tokio::test]
async fn rejected_credentials_close_the_connection_without_forwarding_traffic() {
    let (mut client, downstream_server) = common::downstream_pair().await;
    let (broker_addr, broker_listener) = common::fake_broker().await;

    // The broker should never observe an ApiVersions frame; the
    // handshake was rejected before the pumps ever start.
    let broker_task = tokio::spawn(async move {
        let (mut broker_conn, _) = broker_listener.accept().await.unwrap();
        let pool = BufferPool::new(65536);
        let result = tokio::time::timeout(Duration::from_millis(200), frame::read_frame(&mut broker_conn, &pool, None)).await;
        assert!(result.is_err() || matches!(result, Ok(Ok(None))));
    });

    let conn = Conn {
        broker_address: (broker_addr.ip().to_string(), broker_addr.port()),
        downstream_stream: downstream_server,
    };
    let dialer = Arc::new(common::direct_dialer(Duration::from_secs(2)));
    let config = config_with_local_sasl().await;
    let collaborators = Arc::new(HandlerCollaborators {
        password_authenticator: Arc::new(Accepts("alice", "secret")),
        ..common::identity_collaborators()
    });
    let conn_set = ConnSet::new();

    let handler_task = tokio::spawn(handler::handle_connection(conn, dialer, config, collaborators, conn_set));

    let pool = BufferPool::new(65536);
    frame::write_frame(&mut client, &handshake_request(1), None).await.unwrap();
    let _ = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();

    frame::write_frame(&mut client, &authenticate_request(2, "alice", "wrong-password"), None)
        .await
        .unwrap();
    let auth_reply = frame::read_frame(&mut client, &pool, None).await.unwrap().unwrap();
    let decoded = SaslAuthenticateResponseBody::decode(&auth_reply[4..]).unwrap();
    assert_ne!(decoded.error_code, 0);

    let result = tokio::time::timeout(Duration::from_secs(1), handler_task)
        .await
        .expect("handler should finish promptly")
        .expect("handler task should not panic");
    assert!(result.is_err(), "handler should report an auth error");

    broker_task.await.unwrap();
}
