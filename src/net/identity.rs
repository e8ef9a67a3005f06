//! Identity provider client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` plus a browser
//! redirect for login. Server-side (SSR): inert, since sessions only exist
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of errors. A failed lookup is logged
//! and reads as "signed out"; login and logout are fire-and-forget.

#![allow(clippy::unused_async)]

use crate::config::ClientConfig;
use crate::net::types::AuthUser;

/// The hosted identity service as the app sees it.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// The signed-in user, or `None` when signed out or unreachable.
    async fn current_user(&self) -> Option<AuthUser>;

    /// Start the provider's sign-in flow.
    async fn login(&self);

    /// End the provider session.
    async fn logout(&self);
}

/// Identity provider reached over HTTP at configured endpoints.
#[derive(Clone, Debug)]
pub struct HttpIdentityProvider {
    me_url: String,
    login_url: String,
    logout_url: String,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            me_url: config.auth_me_url.clone(),
            login_url: config.auth_login_url.clone(),
            logout_url: config.auth_logout_url.clone(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_user(&self) -> Option<AuthUser> {
        #[cfg(feature = "hydrate")]
        {
            let resp = match gloo_net::http::Request::get(&self.me_url).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    log::warn!("identity lookup failed: {e}");
                    return None;
                }
            };
            if !resp.ok() {
                return None;
            }
            match resp.json::<AuthUser>().await {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("identity response unreadable: {e}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.me_url;
            None
        }
    }

    async fn login(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_href(&self.login_url) {
                log::warn!("login redirect failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.login_url;
        }
    }

    async fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = gloo_net::http::Request::post(&self.logout_url).send().await {
                log::warn!("logout failed: {e}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.logout_url;
        }
    }
}
