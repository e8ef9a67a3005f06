use super::*;
use crate::util::storage::MemoryStore;

fn vendor_profile() -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        email: "chef@example.com".to_owned(),
        role: RoleDetails::Vendor(VendorDetails {
            cuisine_type: "Thai".to_owned(),
            vendor_type: "Street Food".to_owned(),
            looking_for: "Food Court".to_owned(),
            ..VendorDetails::default()
        }),
        display_name: "Chef".to_owned(),
        company_name: String::new(),
        phone: String::new(),
        location: "Bristol".to_owned(),
        bio: String::new(),
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn profile_json_is_flat_with_user_type_tag() {
    let json = serde_json::to_value(vendor_profile()).unwrap();
    assert_eq!(json["userType"], "vendor");
    assert_eq!(json["cuisineType"], "Thai");
    assert_eq!(json["displayName"], "Chef");
    assert!(json.get("role").is_none());
}

#[test]
fn landlord_profile_decodes_from_flat_json() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u2",
        "email": "owner@example.com",
        "userType": "landlord",
        "displayName": "Owner",
        "location": "Leeds",
        "propertyTypes": "Pub",
        "createdAt": 1
    }))
    .unwrap();
    assert_eq!(profile.user_type(), UserType::Landlord);
    let RoleDetails::Landlord(details) = profile.role else {
        panic!("expected landlord details");
    };
    assert_eq!(details.property_types, "Pub");
    assert_eq!(details.landlord_locations, "");
}

#[test]
fn save_then_load_profile() {
    let store = MemoryStore::new();
    save_profile(&store, &vendor_profile()).unwrap();
    let loaded = load_profile(&store).unwrap().expect("profile stored");
    assert_eq!(loaded, vendor_profile());
}

#[test]
fn completed_profile_requires_user_type() {
    let store = MemoryStore::new();
    assert!(!has_completed_profile(&store));

    store.set(PROFILE_KEY, r#"{"displayName":"Ann"}"#).unwrap();
    assert!(!has_completed_profile(&store));

    store.set(PROFILE_KEY, r#"{"userType":""}"#).unwrap();
    assert!(!has_completed_profile(&store));

    store.set(PROFILE_KEY, r#"{"userType":"landlord"}"#).unwrap();
    assert!(has_completed_profile(&store));
}

#[test]
fn garbage_profile_counts_as_missing() {
    let store = MemoryStore::new();
    store.set(PROFILE_KEY, "not json").unwrap();
    assert!(!has_completed_profile(&store));
}

#[test]
fn profile_state_reads_stored_profile() {
    let store = MemoryStore::new();
    assert_eq!(ProfileState::read(&store), ProfileState::default());

    save_profile(&store, &vendor_profile()).unwrap();
    let state = ProfileState::read(&store);
    assert!(state.completed);
    assert_eq!(state.user_type(), Some(UserType::Vendor));
}

#[test]
fn profile_state_completed_even_if_profile_undecodable() {
    let store = MemoryStore::new();
    store.set(PROFILE_KEY, r#"{"userType":"vendor"}"#).unwrap();
    let state = ProfileState::read(&store);
    assert!(state.completed);
    assert!(state.profile.is_none());
}
