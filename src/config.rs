//! Runtime configuration for the browser client and the static host.
//!
//! The client is compiled to WASM, so its settings are baked in at build
//! time from `FOOD_PITCH_*` environment variables. The host binary reads
//! its settings from the process environment at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_ME_URL: &str = "/api/auth/me";
pub const DEFAULT_AUTH_LOGIN_URL: &str = "/auth/login";
pub const DEFAULT_AUTH_LOGOUT_URL: &str = "/api/auth/logout";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Endpoints the browser client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// WebSocket URL of the realtime provider. Empty selects the in-tab
    /// loopback hub.
    pub realtime_url: String,
    pub auth_me_url: String,
    pub auth_login_url: String,
    pub auth_logout_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            realtime_url: String::new(),
            auth_me_url: DEFAULT_AUTH_ME_URL.to_owned(),
            auth_login_url: DEFAULT_AUTH_LOGIN_URL.to_owned(),
            auth_logout_url: DEFAULT_AUTH_LOGOUT_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build from compile-time environment.
    ///
    /// Optional:
    /// - `FOOD_PITCH_REALTIME_URL`: empty (loopback) by default
    /// - `FOOD_PITCH_AUTH_ME_URL`: default `/api/auth/me`
    /// - `FOOD_PITCH_AUTH_LOGIN_URL`: default `/auth/login`
    /// - `FOOD_PITCH_AUTH_LOGOUT_URL`: default `/api/auth/logout`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOOD_PITCH_REALTIME_URL"),
            option_env!("FOOD_PITCH_AUTH_ME_URL"),
            option_env!("FOOD_PITCH_AUTH_LOGIN_URL"),
            option_env!("FOOD_PITCH_AUTH_LOGOUT_URL"),
        )
    }

    fn from_values(realtime: Option<&str>, me: Option<&str>, login: Option<&str>, logout: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            realtime_url: non_empty(realtime).unwrap_or(defaults.realtime_url),
            auth_me_url: non_empty(me).unwrap_or(defaults.auth_me_url),
            auth_login_url: non_empty(login).unwrap_or(defaults.auth_login_url),
            auth_logout_url: non_empty(logout).unwrap_or(defaults.auth_logout_url),
        }
    }

    #[must_use]
    pub fn uses_loopback_realtime(&self) -> bool {
        self.realtime_url.is_empty()
    }
}

/// Settings for the host binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the compiled `pkg/` bundle.
    pub site_root: String,
}

impl ServerConfig {
    /// Build from `PORT` and `LEPTOS_SITE_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("LEPTOS_SITE_ROOT").ok().as_deref())
    }

    fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match non_empty(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let site_root = non_empty(site_root).unwrap_or_else(|| DEFAULT_SITE_ROOT.to_owned());
        Ok(Self { port, site_root })
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
