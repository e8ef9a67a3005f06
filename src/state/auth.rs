#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` because the identity provider has not answered
/// yet when the app first renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Which top-level view the app shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Identity provider has not resolved yet.
    Loading,
    /// Signed in without a stored profile.
    Onboarding,
    /// Vendor directory, for visitors and onboarded users alike.
    Directory,
}

/// Pick the view for the current auth state and stored-profile presence.
#[must_use]
pub fn resolve_gate(auth: &AuthState, has_profile: bool) -> GateView {
    if auth.loading {
        GateView::Loading
    } else if auth.is_authenticated() && !has_profile {
        GateView::Onboarding
    } else {
        GateView::Directory
    }
}
