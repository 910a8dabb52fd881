use std::{env, time::Duration};

pub const DEFAULT_STORE_URL: &str = "https://store.steampowered.com/";
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/get";
pub const DEFAULT_TOAST_DISMISS: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base of the storefront's public endpoints.
    pub store_url: String,
    /// CORS relay that wraps the storefront response in a JSON envelope.
    pub relay_url: String,
    /// How long an advisory message stays visible.
    pub toast_dismiss: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            toast_dismiss: DEFAULT_TOAST_DISMISS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            store_url: lookup("STEAM_STORE_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.store_url),
            relay_url: lookup("STEAM_RELAY_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.relay_url),
            toast_dismiss: lookup("TOAST_DISMISS_SECS")
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.toast_dismiss),
        }
    }
}
