//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::identity::HttpIdentityProvider;
use crate::pages::home::HomePage;
use crate::state::{auth::AuthState, chat::ChatState, profile::ProfileState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the signed-in user once on
/// the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let identity = HttpIdentityProvider::from_config(&config);

    let auth = RwSignal::new(AuthState::default());
    let profile = RwSignal::new(ProfileState::default());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(config);
    provide_context(identity.clone());
    provide_context(auth);
    provide_context(profile);
    provide_context(ui);
    provide_context(chat);

    // The identity provider and localStorage only exist in the browser, so
    // SSR always renders the loading gate and the client resolves it.
    #[cfg(feature = "hydrate")]
    {
        use crate::net::identity::IdentityProvider;
        use crate::util::storage::LocalStorage;

        leptos::task::spawn_local(async move {
            let user = identity.current_user().await;
            profile.set(ProfileState::read(&LocalStorage));
            auth.set(AuthState { user, loading: false });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identity, profile, auth);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/food-pitch.css"/>
        <Title text="Oya's Food Pitch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
