//! Top bar with branding, the signed-in user's profile summary, and the
//! sign in / sign out button.

use leptos::prelude::*;

use crate::net::identity::{HttpIdentityProvider, IdentityProvider};
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let identity = expect_context::<HttpIdentityProvider>();

    let login_identity = identity.clone();
    let on_sign_in = move |_| {
        let identity = login_identity.clone();
        leptos::task::spawn_local(async move { identity.login().await });
    };

    let on_sign_out = move |_| {
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            identity.logout().await;
            auth.update(|a| a.user = None);
        });
    };

    let summary = move || {
        let state = profile.get();
        let user = auth.get().user?;
        let name = state
            .profile
            .as_ref()
            .map(|p| p.display_name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| user.label().to_owned());
        let role = state.user_type().map(|t| t.as_str());
        let company = state.profile.as_ref().map(|p| p.company_name.clone()).filter(|c| !c.is_empty());
        Some(view! {
            <div class="site-header__profile">
                <span class="site-header__name">{name}</span>
                {role.map(|r| view! { <span class="site-header__badge">{r}</span> })}
                {company.map(|c| view! { <span class="site-header__company">{c}</span> })}
            </div>
        })
    };

    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <span class="site-header__logo">"OFP"</span>
                <span class="site-header__title">"Oya's Food Pitch"</span>
            </div>
            <div class="site-header__actions">
                {summary}
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || view! {
                        <button class="btn btn--primary" on:click=on_sign_in.clone()>"Sign In"</button>
                    }
                >
                    <button class="btn" on:click=on_sign_out.clone()>"Sign Out"</button>
                </Show>
            </div>
        </header>
    }
}
