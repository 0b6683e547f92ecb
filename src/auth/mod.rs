//! The four authentication layers spec §4.5–§4.8 describe: two SASL
//! PLAIN handshakes (local server-side, upstream client-side) and two
//! symmetric gateway token handshakes (server-side and client-side),
//! plus the shared wire codec the gateway pair uses.

pub mod gateway_client;
pub mod gateway_frame;
pub mod gateway_server;
pub mod local_sasl_server;
pub mod sasl_client;
