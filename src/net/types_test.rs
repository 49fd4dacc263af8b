use super::*;
use serde_json::json;

#[test]
fn envelope_round_trips_through_json() {
    let envelope = Envelope::new("system", json!({"msg": "hi", "ts": 1000}));
    let text = serde_json::to_string(&envelope).expect("serialize");
    let back: Envelope = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, envelope);
}

#[test]
fn envelope_data_defaults_to_null_when_missing() {
    let envelope: Envelope = serde_json::from_str(r#"{"event":"typing"}"#).expect("deserialize");
    assert_eq!(envelope.event, "typing");
    assert!(envelope.data.is_null());
}

#[test]
fn join_carries_empty_payload() {
    let envelope = Envelope::join();
    assert_eq!(envelope.event, "join");
    assert_eq!(envelope.data, json!({}));
}

#[test]
fn chat_message_carries_text_field() {
    let envelope = Envelope::chat_message("hello");
    assert_eq!(envelope.event, "chat_message");
    assert_eq!(envelope.data, json!({"text": "hello"}));
}

#[test]
fn typing_carries_empty_payload() {
    let envelope = Envelope::typing();
    assert_eq!(envelope.event, "typing");
    assert_eq!(envelope.data, json!({}));
}
