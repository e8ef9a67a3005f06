use super::*;
use crate::net::types::AuthUser;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(AuthUser {
            id: "u-1".to_owned(),
            email: "sam@example.com".to_owned(),
            display_name: String::new(),
        }),
        loading: false,
    }
}

// =============================================================
// contact_action
// =============================================================

#[test]
fn contact_while_signed_out_starts_sign_in() {
    let auth = AuthState { user: None, loading: false };
    assert_eq!(contact_action(&auth, 3), ContactAction::SignIn);
}

#[test]
fn contact_while_signed_in_opens_chat_for_vendor() {
    assert_eq!(contact_action(&signed_in(), 3), ContactAction::OpenChat(3));
}

// =============================================================
// results_label
// =============================================================

#[test]
fn results_label_unfiltered_counts_featured() {
    assert_eq!(results_label(10, false), "Featured vendors (10)");
}

#[test]
fn results_label_filtered_pluralizes() {
    assert_eq!(results_label(1, true), "1 vendor found");
    assert_eq!(results_label(2, true), "2 vendors found");
}

#[test]
fn results_label_empty_result() {
    assert_eq!(results_label(0, true), "No vendors match your search");
}
