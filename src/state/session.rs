#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Connection-scoped identity and link state.
///
/// The username is assigned by the server once per connection via the
/// `set_username` event; a reconnect simply overwrites it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub username: Option<String>,
    pub connection: ConnectionStatus,
}

/// Websocket connection lifecycle, shown in the header badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
}
