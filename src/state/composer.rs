#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Normalize composer input for submission.
///
/// Returns `None` when the trimmed text is empty, in which case the
/// submit action is a no-op and the draft is left alone.
pub fn submission(input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Whether a keypress should submit the draft.
///
/// Enter mid-composition commits the IME buffer, never the message.
pub fn enter_submits(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}
