//! Vendor directory page: hero, search, vendor grid, and dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the home gate for anonymous visitors and for signed-in users
//! who finished onboarding. Contacting a vendor needs a session, so an
//! anonymous contact starts sign-in instead of opening the chat.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use leptos::prelude::*;

use crate::components::chat_modal::ChatModal;
use crate::components::search_panel::SearchPanel;
use crate::components::site_header::SiteHeader;
use crate::components::vendor_card::VendorCard;
use crate::components::vendor_profile_modal::VendorProfileModal;
use crate::net::identity::{HttpIdentityProvider, IdentityProvider};
use crate::state::auth::AuthState;
use crate::state::catalog::{featured_vendors, find_vendor};
use crate::state::ui::UiState;

/// What a Contact click should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    SignIn,
    OpenChat(u32),
}

/// Decide the Contact outcome for `vendor_id` given the auth state.
#[must_use]
pub fn contact_action(auth: &AuthState, vendor_id: u32) -> ContactAction {
    if auth.is_authenticated() { ContactAction::OpenChat(vendor_id) } else { ContactAction::SignIn }
}

/// Result line above the grid.
#[must_use]
pub fn results_label(count: usize, filtered: bool) -> String {
    match (count, filtered) {
        (0, _) => "No vendors match your search".to_owned(),
        (1, true) => "1 vendor found".to_owned(),
        (n, true) => format!("{n} vendors found"),
        (n, false) => format!("Featured vendors ({n})"),
    }
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let identity = expect_context::<HttpIdentityProvider>();

    let filter = Memo::new(move |_| ui.get().filter);
    let profile_vendor = Memo::new(move |_| ui.get().profile_vendor);
    let chat_vendor = Memo::new(move |_| ui.get().chat_vendor);

    let on_contact = Callback::new(move |vendor_id: u32| match contact_action(&auth.get_untracked(), vendor_id) {
        ContactAction::OpenChat(id) => ui.update(|u| u.open_chat(id)),
        ContactAction::SignIn => {
            let identity = identity.clone();
            leptos::task::spawn_local(async move { identity.login().await });
        }
    });
    let on_view = Callback::new(move |vendor_id: u32| ui.update(|u| u.open_profile(vendor_id)));
    let on_close = Callback::new(move |()| ui.update(UiState::close_dialogs));

    view! {
        <div class="directory-page">
            <SiteHeader/>

            <section class="hero">
                <h1 class="hero__title">"Connect Food Vendors with Commercial Spaces"</h1>
                <p class="hero__subtitle">
                    "Landlords find talented food vendors. Vendors find the kitchens, pubs and food courts to grow their business."
                </p>
            </section>

            <SearchPanel/>

            <section class="vendor-grid">
                <p class="vendor-grid__summary">
                    {move || {
                        let applied = filter.get();
                        results_label(applied.apply(featured_vendors()).len(), !applied.is_empty())
                    }}
                </p>
                <div class="vendor-grid__cards">
                    {move || {
                        filter
                            .get()
                            .apply(featured_vendors())
                            .into_iter()
                            .map(|vendor| view! { <VendorCard vendor on_contact on_view/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <ol class="how-it-works__steps">
                    <li>
                        <h3>"Create Your Profile"</h3>
                        <p>"Tell us whether you have a space to fill or food to serve."</p>
                    </li>
                    <li>
                        <h3>"Find a Match"</h3>
                        <p>"Search vendors by cuisine, city and business type."</p>
                    </li>
                    <li>
                        <h3>"Start the Conversation"</h3>
                        <p>"Message vendors directly and agree the details together."</p>
                    </li>
                </ol>
            </section>

            <footer class="site-footer">
                <p>"\u{a9} Oya's Food Pitch. Connecting food vendors with commercial spaces across the UK."</p>
            </footer>

            {move || {
                profile_vendor
                    .get()
                    .and_then(find_vendor)
                    .map(|vendor| view! { <VendorProfileModal vendor on_contact on_close/> })
            }}
            {move || {
                chat_vendor.get().and_then(find_vendor).map(|vendor| view! { <ChatModal vendor on_close/> })
            }}
        </div>
    }
}
