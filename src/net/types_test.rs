use super::*;

#[test]
fn auth_user_label_prefers_display_name() {
    let user = AuthUser {
        id: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        display_name: "Ann".to_owned(),
    };
    assert_eq!(user.label(), "Ann");
}

#[test]
fn auth_user_label_falls_back_to_email() {
    let user = AuthUser {
        id: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        display_name: "  ".to_owned(),
    };
    assert_eq!(user.label(), "ann@example.com");
}

#[test]
fn auth_user_display_name_defaults_when_missing() {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ann@example.com"
    }))
    .unwrap();
    assert_eq!(user.display_name, "");
}

#[test]
fn channel_event_uses_type_field_on_the_wire() {
    let event: ChannelEvent = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "type": "chat",
        "userId": "u1",
        "metadata": { "displayName": "Ann", "userType": "landlord" },
        "data": { "text": "hi", "timestamp": 5 },
        "timestamp": 5
    }))
    .unwrap();
    assert_eq!(event.event_type, "chat");
    assert_eq!(event.metadata.unwrap().display_name, "Ann");
    assert_eq!(event.data["text"], "hi");
}

#[test]
fn member_metadata_omits_missing_avatar() {
    let meta = MemberMetadata {
        display_name: "Ann".to_owned(),
        user_type: "vendor".to_owned(),
        avatar: None,
    };
    let json = serde_json::to_value(&meta).unwrap();
    assert!(json.get("avatar").is_none());
    assert_eq!(json["userType"], "vendor");
}
