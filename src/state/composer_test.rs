use super::*;

// =============================================================
// submission
// =============================================================

#[test]
fn submission_trims_surrounding_whitespace() {
    assert_eq!(submission("  hello \n"), Some("hello".to_owned()));
}

#[test]
fn submission_passes_plain_text_through() {
    assert_eq!(submission("hello"), Some("hello".to_owned()));
}

#[test]
fn submission_rejects_empty_input() {
    assert_eq!(submission(""), None);
}

#[test]
fn submission_rejects_whitespace_only_input() {
    assert_eq!(submission(" \t \n "), None);
}

// =============================================================
// enter_submits
// =============================================================

#[test]
fn enter_submits_when_not_composing() {
    assert!(enter_submits("Enter", false));
}

#[test]
fn enter_does_not_submit_mid_composition() {
    assert!(!enter_submits("Enter", true));
}

#[test]
fn other_keys_never_submit() {
    assert!(!enter_submits("a", false));
    assert!(!enter_submits("Shift", false));
    assert!(!enter_submits("a", true));
}
