use super::*;
use crate::net::types::MemberMetadata;

fn member() -> Member {
    Member {
        user_id: "u1".to_owned(),
        metadata: MemberMetadata {
            display_name: "Ann".to_owned(),
            user_type: "landlord".to_owned(),
            avatar: None,
        },
    }
}

#[test]
fn publish_envelope_wire_shape() {
    let envelope = OutboundEnvelope::Publish {
        channel: "chat-u1-3".to_owned(),
        event_type: "chat".to_owned(),
        data: serde_json::json!({ "text": "hi", "timestamp": 1 }),
        member: member(),
    };
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["action"], "publish");
    assert_eq!(json["type"], "chat");
    assert_eq!(json["member"]["userId"], "u1");
    assert_eq!(json["member"]["metadata"]["displayName"], "Ann");
}

#[test]
fn unsubscribe_envelope_carries_only_channel() {
    let json = serde_json::to_value(OutboundEnvelope::Unsubscribe { channel: "c".to_owned() }).unwrap();
    assert_eq!(json, serde_json::json!({ "action": "unsubscribe", "channel": "c" }));
}

#[test]
fn parse_inbound_message_for_channel() {
    let raw = r#"{
        "action": "message",
        "channel": "chat-u1-3",
        "event": {
            "id": "e1",
            "type": "chat",
            "userId": "v3",
            "metadata": { "displayName": "Pizza", "userType": "vendor" },
            "data": { "text": "ciao" },
            "timestamp": 12
        }
    }"#;
    let Some(InboundEnvelope::Message { event, .. }) = parse_inbound(raw, "chat-u1-3") else {
        panic!("expected message envelope");
    };
    assert_eq!(event.id, "e1");
    assert_eq!(event.data["text"], "ciao");
}

#[test]
fn parse_inbound_presence_members() {
    let raw = r#"{"action":"presence","channel":"c","members":[
        {"userId":"u1","metadata":{"displayName":"Ann","userType":"landlord"}}
    ]}"#;
    let Some(InboundEnvelope::Presence { members, .. }) = parse_inbound(raw, "c") else {
        panic!("expected presence envelope");
    };
    assert_eq!(members, vec![member()]);
}

#[test]
fn parse_inbound_ignores_other_channels() {
    let raw = r#"{"action":"error","channel":"other","message":"nope"}"#;
    assert!(parse_inbound(raw, "mine").is_none());
    assert!(parse_inbound(raw, "other").is_some());
}

#[test]
fn parse_inbound_rejects_garbage_and_unknown_actions() {
    assert!(parse_inbound("not json", "c").is_none());
    assert!(parse_inbound(r#"{"action":"typing","channel":"c"}"#, "c").is_none());
}
