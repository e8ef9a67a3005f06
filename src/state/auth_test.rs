use super::*;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(AuthUser {
            id: "u1".to_owned(),
            email: "ann@example.com".to_owned(),
            display_name: "Ann".to_owned(),
        }),
        loading: false,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// resolve_gate
// =============================================================

#[test]
fn gate_shows_loading_until_provider_resolves() {
    assert_eq!(resolve_gate(&AuthState::default(), false), GateView::Loading);
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(resolve_gate(&state, true), GateView::Loading);
}

#[test]
fn gate_requires_onboarding_for_signed_in_user_without_profile() {
    assert_eq!(resolve_gate(&signed_in(), false), GateView::Onboarding);
}

#[test]
fn gate_shows_directory_once_profile_exists() {
    assert_eq!(resolve_gate(&signed_in(), true), GateView::Directory);
}

#[test]
fn gate_shows_directory_to_anonymous_visitors() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(resolve_gate(&state, false), GateView::Directory);
}
