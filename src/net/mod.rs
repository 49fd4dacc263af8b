//! Network layer: wire types and the websocket event client.

pub mod event_client;
pub mod types;
