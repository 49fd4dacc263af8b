#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// How long a typing notice stays visible without a follow-up event, in
/// milliseconds. Each inbound `typing` event schedules its own
/// fire-and-forget clear; there is no cancellation.
pub const TYPING_CLEAR_MS: u64 = 900;

/// State for the one-line typing indicator under the log.
#[derive(Clone, Debug, Default)]
pub struct TypingState {
    /// Empty when nobody is typing.
    pub notice: String,
}
