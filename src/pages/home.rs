//! Landing route: chooses loading, onboarding, or the directory.

use leptos::prelude::*;

use crate::pages::{directory::DirectoryPage, onboarding::OnboardingPage};
use crate::state::auth::{AuthState, GateView, resolve_gate};
use crate::state::profile::ProfileState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let gate = Memo::new(move |_| resolve_gate(&auth.get(), profile.get().completed));

    move || match gate.get() {
        GateView::Loading => view! {
            <div class="loading-page">
                <div class="loading-page__spinner"></div>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GateView::Onboarding => view! { <OnboardingPage/> }.into_any(),
        GateView::Directory => view! { <DirectoryPage/> }.into_any(),
    }
}
