use super::*;
use crate::net::types::MemberMetadata;
use crate::state::catalog::find_vendor;
use crate::util::storage::MemoryStore;

fn member(user_id: &str, name: &str) -> Member {
    Member {
        user_id: user_id.to_owned(),
        metadata: MemberMetadata {
            display_name: name.to_owned(),
            user_type: "landlord".to_owned(),
            avatar: None,
        },
    }
}

fn chat_event(id: &str, user_id: &str, text: &str) -> ChannelEvent {
    ChannelEvent {
        id: id.to_owned(),
        event_type: CHAT_EVENT.to_owned(),
        user_id: user_id.to_owned(),
        metadata: Some(member(user_id, "Remote").metadata),
        data: serde_json::json!({ "text": text, "timestamp": 9 }),
        timestamp: 9,
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_and_disconnected() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}

#[test]
fn chat_key_combines_user_and_vendor() {
    assert_eq!(chat_key("u1", 7), "chat-u1-7");
}

// =============================================================
// Messages
// =============================================================

#[test]
fn welcome_message_is_authored_by_vendor() {
    let vendor = find_vendor(5).unwrap();
    let msg = welcome_message(vendor, 10);
    assert_eq!(msg.sender_id, "5");
    assert_eq!(msg.sender_name, "Bangkok Street Kitchen");
    assert!(msg.id.starts_with("welcome-"));
    assert!(msg.text.contains("partner with a thai street food for?"));
    assert!(!msg.is_read);
}

#[test]
fn outbound_message_is_read_and_attributed() {
    let msg = outbound_message(&member("u1", "Ann"), "hello", 3);
    assert!(msg.id.starts_with("msg-"));
    assert_eq!(msg.sender_name, "Ann");
    assert!(msg.is_read);
    assert_eq!(msg.payload()["text"], "hello");
    assert_eq!(msg.payload()["id"], msg.id.as_str());
}

#[test]
fn from_event_parses_chat_and_marks_read_for_self() {
    let msg = ChatMessage::from_event(&chat_event("m1", "u1", "hi"), "u1").unwrap();
    assert_eq!(msg.text, "hi");
    assert_eq!(msg.sender_name, "Remote");
    assert!(msg.is_read);

    let msg = ChatMessage::from_event(&chat_event("m2", "v5", "hey"), "u1").unwrap();
    assert!(!msg.is_read);
}

#[test]
fn from_event_ignores_other_types_and_missing_text() {
    let mut event = chat_event("m1", "u1", "hi");
    event.event_type = "typing".to_owned();
    assert!(ChatMessage::from_event(&event, "u1").is_none());

    let mut event = chat_event("m1", "u1", "hi");
    event.data = serde_json::json!({});
    assert!(ChatMessage::from_event(&event, "u1").is_none());
}

#[test]
fn from_event_prefers_payload_id() {
    let mut event = chat_event("provider-1", "u1", "hi");
    event.data["id"] = serde_json::json!("msg-local");
    let msg = ChatMessage::from_event(&event, "u1").unwrap();
    assert_eq!(msg.id, "msg-local");
}

#[test]
fn from_event_without_metadata_uses_unknown_sender() {
    let mut event = chat_event("m1", "v5", "hi");
    event.metadata = None;
    let msg = ChatMessage::from_event(&event, "u1").unwrap();
    assert_eq!(msg.sender_name, "Unknown");
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn append_drops_duplicate_ids() {
    let mut state = ChatState::default();
    let msg = outbound_message(&member("u1", "Ann"), "hello", 1);
    assert!(state.append(msg.clone()));
    assert!(!state.append(msg));
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn sender_initials_take_first_two_chars() {
    let msg = outbound_message(&member("u1", "Ann"), "hello", 1);
    assert_eq!(msg.sender_initials(), "An");
}

#[test]
fn stored_timestamps_are_whole_milliseconds() {
    let store = MemoryStore::new();
    let msg = outbound_message(&member("u1", "Ann"), "hello", crate::util::clock::now_ms());
    save_transcript(&store, "chat-u1-1", std::slice::from_ref(&msg)).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&store.get("chat-u1-1").unwrap().unwrap()).unwrap();
    assert!(raw[0]["timestamp"].is_i64());
    assert_eq!(load_transcript(&store, "chat-u1-1").unwrap(), Some(vec![msg]));
}

#[test]
fn transcript_round_trips_through_store() {
    let store = MemoryStore::new();
    let key = chat_key("u1", 1);
    assert_eq!(load_transcript(&store, &key).unwrap(), None);

    let messages = vec![
        welcome_message(find_vendor(1).unwrap(), 0),
        outbound_message(&member("u1", "Ann"), "hello", 1),
    ];
    save_transcript(&store, &key, &messages).unwrap();
    assert_eq!(load_transcript(&store, &key).unwrap(), Some(messages));
}

#[test]
fn stored_transcript_uses_camel_case_keys() {
    let msg = outbound_message(&member("u1", "Ann"), "hello", 1);
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["senderId"], "u1");
    assert_eq!(json["isRead"], true);
    assert!(json.get("senderAvatar").is_none());
}
