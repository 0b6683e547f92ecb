//! Configuration, read via the `config` crate layered over
//! `dotenvy`-loaded environment variables — generalizes the teacher's
//! flat `Config::from_env` into the full nested option set spec §6
//! enumerates (`kafka.*`, `proxy.*`, `forward_proxy.*`, `auth.*`), plus
//! the listener bind address and shutdown drain timeout the teacher's
//! original `Config` already carried.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::auth::gateway_client::GatewayClientConfig;
use crate::auth::gateway_server::GatewayServerConfig;
use crate::auth::local_sasl_server::LocalSaslConfig;
use crate::auth::sasl_client::SaslClientConfig;
use crate::dialer::{ForwardProxyAuth, ForwardProxySpec};
use crate::tcp_options::TcpConnOptions;

/// Shape the `config` crate deserializes environment variables into.
/// Durations are read as whole seconds (`*_secs`) since `config`/`serde`
/// have no built-in notion of `Duration`; [`Config::load`] converts
/// them immediately after deserializing.
#[derive(Debug, Deserialize)]
struct RawConfig {
    server_host: String,
    server_port: u16,
    client_drain_timeout_secs: u64,
    kafka: RawKafka,
    proxy: RawProxy,
    forward_proxy: Option<RawForwardProxy>,
    auth: RawAuth,
}

#[derive(Debug, Deserialize)]
struct RawKafka {
    /// `host:port` of the single broker this proxy instance targets.
    /// Not one of spec §6's enumerated `kafka.*` options — the listener
    /// that maps a downstream connection to a broker address is an
    /// external collaborator there — but the binary entry point needs
    /// some default route to actually dial, so it lives alongside the
    /// rest of `kafka.*` rather than invent a whole routing layer.
    broker_address: String,
    dial_timeout_secs: u64,
    keep_alive_secs: u64,
    read_timeout_secs: u64,
    write_timeout_secs: u64,
    connection_read_buffer_size: usize,
    connection_write_buffer_size: usize,
    max_open_requests: usize,
    client_id: String,
    #[serde(default)]
    forbidden_api_keys: Vec<i16>,
    tls: RawTls,
    sasl: RawSasl,
}

#[derive(Debug, Deserialize)]
struct RawTls {
    enable: bool,
}

#[derive(Debug, Deserialize)]
struct RawSasl {
    enable: bool,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Deserialize)]
struct RawProxy {
    request_buffer_size: usize,
    response_buffer_size: usize,
}

#[derive(Debug, Deserialize)]
struct RawForwardProxy {
    #[serde(default)]
    url: String,
    scheme: String,
    address: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuth {
    local: RawLocalAuth,
    gateway: RawGatewayAuth,
}

#[derive(Debug, Deserialize)]
struct RawLocalAuth {
    enable: bool,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct RawGatewayAuth {
    client: RawGatewaySide,
    server: RawGatewaySide,
}

#[derive(Debug, Deserialize)]
struct RawGatewaySide {
    enable: bool,
    #[serde(default)]
    magic: u64,
    #[serde(default)]
    method: String,
    timeout_secs: u64,
}

/// Fully resolved configuration, with every duration already converted
/// and every per-feature config wrapped in `Option` to mirror its
/// `enable` flag — the handler only ever checks `is_some()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_host: String,
    pub listen_port: u16,
    pub client_drain_timeout_secs: u64,
    pub broker_address: (String, u16),

    pub dial_timeout: Duration,
    pub keep_alive: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub connection_read_buffer_size: usize,
    pub connection_write_buffer_size: usize,
    pub max_open_requests: usize,
    pub client_id: String,
    pub forbidden_api_keys: HashSet<i16>,
    pub tls_enable: bool,
    pub sasl_client: Option<SaslClientSettings>,

    pub request_buffer_size: usize,
    pub response_buffer_size: usize,

    pub forward_proxy: Option<ForwardProxySpecConfig>,

    pub local_auth: Option<LocalSaslConfig>,
    pub gateway_client: Option<GatewayClientConfig>,
    pub gateway_server: Option<GatewayServerConfig>,
}

/// `kafka.sasl.*` once `enable` is true; carries the credentials the
/// upstream SASL PLAIN client handshake needs in addition to the
/// already-resolved `client_id`/timeouts above.
#[derive(Debug, Clone)]
pub struct SaslClientSettings {
    pub username: String,
    pub password: String,
}

/// Parsed `forward_proxy.*` settings, still in `Config`-owned form (as
/// opposed to [`ForwardProxySpec`], which [`Config::forward_proxy_spec`]
/// produces once, at startup, to build the dialer chain).
#[derive(Debug, Clone)]
pub struct ForwardProxySpecConfig {
    pub scheme: String,
    pub address: (String, u16),
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Loads `.env` (if present, warns rather than fails when it's
    /// missing — same policy as the teacher), then layers every
    /// `KAFKA_PROXY__*` environment variable over it via the `config`
    /// crate's `Environment` source with a `__` separator for nesting.
    pub fn load() -> anyhow::Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("loaded environment variables from {:?}", path),
            Err(e) if e.not_found() => {
                warn!("no .env file found; relying on environment variables or defaults");
            }
            Err(e) => return Err(e.into()),
        }

        debug!("building configuration from environment");
        let raw: RawConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("KAFKA_PROXY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let sasl_client = raw.kafka.sasl.enable.then(|| SaslClientSettings {
            username: raw.kafka.sasl.username,
            password: raw.kafka.sasl.password,
        });

        let forward_proxy = match raw.forward_proxy {
            Some(fp) => {
                let _ = &fp.url;
                let (host, port) = split_host_port(&fp.address)?;
                Some(ForwardProxySpecConfig {
                    scheme: fp.scheme,
                    address: (host, port),
                    username: fp.username,
                    password: fp.password,
                })
            }
            None => None,
        };

        let local_auth = raw.auth.local.enable.then(|| LocalSaslConfig {
            timeout: Duration::from_secs(raw.auth.local.timeout_secs),
        });

        let gateway_client = raw.auth.gateway.client.enable.then(|| GatewayClientConfig {
            magic: raw.auth.gateway.client.magic,
            method: raw.auth.gateway.client.method,
            timeout: Duration::from_secs(raw.auth.gateway.client.timeout_secs),
        });

        let gateway_server = raw.auth.gateway.server.enable.then(|| GatewayServerConfig {
            magic: raw.auth.gateway.server.magic,
            method: raw.auth.gateway.server.method,
            timeout: Duration::from_secs(raw.auth.gateway.server.timeout_secs),
        });

        let broker_address = split_host_port(&raw.kafka.broker_address)?;

        Ok(Config {
            listen_host: raw.server_host,
            listen_port: raw.server_port,
            client_drain_timeout_secs: raw.client_drain_timeout_secs,
            broker_address,

            dial_timeout: Duration::from_secs(raw.kafka.dial_timeout_secs),
            keep_alive: Duration::from_secs(raw.kafka.keep_alive_secs),
            read_timeout: Duration::from_secs(raw.kafka.read_timeout_secs),
            write_timeout: Duration::from_secs(raw.kafka.write_timeout_secs),
            connection_read_buffer_size: raw.kafka.connection_read_buffer_size,
            connection_write_buffer_size: raw.kafka.connection_write_buffer_size,
            max_open_requests: raw.kafka.max_open_requests,
            client_id: raw.kafka.client_id,
            forbidden_api_keys: raw.kafka.forbidden_api_keys.into_iter().collect(),
            tls_enable: raw.kafka.tls.enable,
            sasl_client,

            request_buffer_size: raw.proxy.request_buffer_size,
            response_buffer_size: raw.proxy.response_buffer_size,

            forward_proxy,

            local_auth,
            gateway_client,
            gateway_server,
        })
    }

    /// Builds the `sasl_client::SaslClientConfig` the handler needs,
    /// pairing this config's credentials with the shared `client_id`
    /// and Kafka read/write timeouts.
    pub fn sasl_client_config(&self) -> Option<SaslClientConfig> {
        self.sasl_client.as_ref().map(|settings| SaslClientConfig {
            client_id: self.client_id.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            read_timeout: self.read_timeout,
            write_timeout: self.write_timeout,
        })
    }

    pub fn tcp_conn_options(&self) -> TcpConnOptions {
        TcpConnOptions {
            keep_alive: self.keep_alive,
            read_buffer_size: self.connection_read_buffer_size,
            write_buffer_size: self.connection_write_buffer_size,
        }
    }

    /// Builds the forward-proxy leg of the dialer chain, if configured.
    /// Consumes nothing borrowed from `self` beyond a clone, since the
    /// dialer chain is built once at startup and then shared via `Arc`.
    pub fn forward_proxy_spec(&self) -> Option<ForwardProxySpec> {
        self.forward_proxy.as_ref().map(|fp| ForwardProxySpec {
            scheme: fp.scheme.clone(),
            address: fp.address.clone(),
            auth: ForwardProxyAuth {
                username: fp.username.clone(),
                password: fp.password.clone(),
            },
        })
    }
}

fn split_host_port(address: &str) -> anyhow::Result<(String, u16)> {
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| anyhow::anyhow!("forward_proxy.address '{address}' is not host:port"))?;
    let port: u16 = port.parse()?;
    Ok((host.to_string(), port))
}

/// The subset of [`Config`] the handler actually consumes, bundled so
/// the supervisor threads one `Arc` per connection rather than the
/// whole process-wide config.
pub struct HandlerConfig {
    pub max_open_requests: usize,
    pub request_buf_size: usize,
    pub response_buf_size: usize,
    pub forbidden_api_keys: HashSet<i16>,
    pub tcp_options: Option<TcpConnOptions>,
    pub sasl_client: Option<SaslClientConfig>,
    pub gateway_client: Option<GatewayClientConfig>,
    pub gateway_server: Option<GatewayServerConfig>,
    pub local_sasl: Option<LocalSaslConfig>,
}

impl From<&Config> for HandlerConfig {
    fn from(config: &Config) -> Self {
        HandlerConfig {
            max_open_requests: config.max_open_requests,
            request_buf_size: config.request_buffer_size,
            response_buf_size: config.response_buffer_size,
            forbidden_api_keys: config.forbidden_api_keys.clone(),
            tcp_options: Some(config.tcp_conn_options()),
            sasl_client: config.sasl_client_config(),
            gateway_client: config.gateway_client.clone(),
            gateway_server: config.gateway_server.clone(),
            local_sasl: config.local_auth.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> RawConfig {
        RawConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 9092,
            client_drain_timeout_secs: 5,
            kafka: RawKafka {
                broker_address: "broker.internal:9092".to_string(),
                dial_timeout_secs: 10,
                keep_alive_secs: 30,
                read_timeout_secs: 10,
                write_timeout_secs: 10,
                connection_read_buffer_size: 65536,
                connection_write_buffer_size: 65536,
                max_open_requests: 128,
                client_id: "kafka-proxy".to_string(),
                forbidden_api_keys: vec![0],
                tls: RawTls { enable: false },
                sasl: RawSasl {
                    enable: false,
                    username: String::new(),
                    password: String::new(),
                },
            },
            proxy: RawProxy {
                request_buffer_size: 65536,
                response_buffer_size: 65536,
            },
            forward_proxy: None,
            auth: RawAuth {
                local: RawLocalAuth {
                    enable: false,
                    timeout_secs: 5,
                },
                gateway: RawGatewayAuth {
                    client: RawGatewaySide {
                        enable: false,
                        magic: 0,
                        method: String::new(),
                        timeout_secs: 5,
                    },
                    server: RawGatewaySide {
                        enable: false,
                        magic: 0,
                        method: String::new(),
                        timeout_secs: 5,
                    },
                },
            },
        }
    }

    #[test]
    fn disabled_features_resolve_to_none() {
        let config = Config::from_raw(sample_raw()).unwrap();
        assert!(config.sasl_client.is_none());
        assert!(config.local_auth.is_none());
        assert!(config.gateway_client.is_none());
        assert!(config.gateway_server.is_none());
        assert!(config.forward_proxy.is_none());
        assert_eq!(config.forbidden_api_keys, HashSet::from([0]));
    }

    #[test]
    fn enabled_local_auth_carries_its_timeout() {
        let mut raw = sample_raw();
        raw.auth.local.enable = true;
        raw.auth.local.timeout_secs = 7;
        let config = Config::from_raw(raw).unwrap();
        assert_eq!(config.local_auth.unwrap().timeout, Duration::from_secs(7));
    }

    #[test]
    fn forward_proxy_address_splits_host_and_port() {
        let mut raw = sample_raw();
        raw.forward_proxy = Some(RawForwardProxy {
            url: String::new(),
            scheme: "socks5".to_string(),
            address: "proxy.internal:1080".to_string(),
            username: None,
            password: None,
        });
        let config = Config::from_raw(raw).unwrap();
        let forward_proxy = config.forward_proxy.unwrap();
        assert_eq!(forward_proxy.address, ("proxy.internal".to_string(), 1080));
    }
}
