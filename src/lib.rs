//! Transparent TCP-level Kafka proxy core: dialer chain, frame codec,
//! correlation table, address-rewriting response filter, local and
//! upstream SASL PLAIN handshakes, gateway token auth, connection
//! pumps, registry, and supervisor. Exposed as a library so both the
//! binary entry point and the integration tests under `tests/` can
//! drive it directly.

pub mod auth;
pub mod collaborators;
pub mod config;
pub mod correlation;
pub mod dialer;
pub mod error;
pub mod handler;
pub mod kafka_protocol;
pub mod metrics;
pub mod pumps;
pub mod registry;
pub mod supervisor;
pub mod tcp_options;
