use super::*;
use crate::state::profile::{PROFILE_KEY, has_completed_profile, load_profile};
use crate::util::storage::MemoryStore;

fn user() -> AuthUser {
    AuthUser {
        id: "u1".to_owned(),
        email: "chef@example.com".to_owned(),
        display_name: "Chef Ann".to_owned(),
    }
}

fn vendor_form() -> OnboardingForm {
    let mut form = OnboardingForm::for_user(&user());
    form.select(UserType::Vendor);
    form.location = "Bristol".to_owned();
    form.cuisine_type = "Thai".to_owned();
    form.vendor_type = "Street Food".to_owned();
    form.looking_for = "Food Court".to_owned();
    form
}

// =============================================================
// Prefill and navigation
// =============================================================

#[test]
fn for_user_prefills_display_name() {
    let form = OnboardingForm::for_user(&user());
    assert_eq!(form.display_name, "Chef Ann");
    assert!(form.selected_type.is_none());
}

#[test]
fn back_clears_role_but_keeps_inputs() {
    let mut form = vendor_form();
    form.back();
    assert!(form.selected_type.is_none());
    assert_eq!(form.cuisine_type, "Thai");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_requires_role() {
    let form = OnboardingForm::for_user(&user());
    assert!(matches!(form.validate(&user(), 0), Err(OnboardingError::NoRoleSelected)));
}

#[test]
fn validate_vendor_missing_cuisine() {
    let mut form = vendor_form();
    form.cuisine_type = String::new();
    assert!(matches!(
        form.validate(&user(), 0),
        Err(OnboardingError::MissingField("Cuisine type"))
    ));
}

#[test]
fn validate_treats_whitespace_as_missing() {
    let mut form = vendor_form();
    form.display_name = "   ".to_owned();
    assert!(matches!(
        form.validate(&user(), 0),
        Err(OnboardingError::MissingField("Display name"))
    ));
}

#[test]
fn validate_landlord_needs_only_common_fields() {
    let mut form = OnboardingForm::for_user(&user());
    form.select(UserType::Landlord);
    form.location = " Leeds ".to_owned();
    let profile = form.validate(&user(), 5).unwrap();
    assert_eq!(profile.user_type(), UserType::Landlord);
    assert_eq!(profile.location, "Leeds");
    assert_eq!(profile.created_at, 5);
}

#[test]
fn validate_vendor_builds_vendor_details() {
    let profile = vendor_form().validate(&user(), 0).unwrap();
    let RoleDetails::Vendor(details) = profile.role else {
        panic!("expected vendor details");
    };
    assert_eq!(details.cuisine_type, "Thai");
    assert_eq!(details.looking_for, "Food Court");
    assert_eq!(profile.email, "chef@example.com");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_without_cuisine_does_not_persist() {
    let store = MemoryStore::new();
    let mut form = vendor_form();
    form.cuisine_type = String::new();
    assert!(form.submit(&user(), &store, 0).is_err());
    assert_eq!(store.get(PROFILE_KEY).unwrap(), None);
    assert!(!has_completed_profile(&store));
}

#[test]
fn submit_persists_profile_and_completes_onboarding() {
    let store = MemoryStore::new();
    let saved = vendor_form().submit(&user(), &store, 42).unwrap();
    assert!(has_completed_profile(&store));
    assert_eq!(load_profile(&store).unwrap(), Some(saved));
}
