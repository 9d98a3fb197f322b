// web_app/api/settings.rs - Server settings from the environment
//
// Site address and asset paths come from leptos_config; this covers the
// session cookie only.

use std::env;
use std::sync::OnceLock;

use chrono::Duration;

pub const DEFAULT_COOKIE_NAME: &str = "oplates_session";
pub const DEFAULT_TTL_DAYS: i64 = 14;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub cookie_name: String,
    pub session_ttl_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            session_ttl_days: DEFAULT_TTL_DAYS,
        }
    }
}

impl Settings {
    /// Read SESSION_COOKIE_NAME and SESSION_TTL_DAYS, keeping defaults for
    /// anything unset or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(name) = lookup("SESSION_COOKIE_NAME").map(|v| v.trim().to_string()) {
            if !name.is_empty() {
                settings.cookie_name = name;
            }
        }

        if let Some(raw) = lookup("SESSION_TTL_DAYS") {
            match raw.trim().parse::<i64>() {
                Ok(days) if days > 0 => settings.session_ttl_days = days,
                _ => tracing::warn!("Ignoring invalid SESSION_TTL_DAYS={:?}", raw),
            }
        }

        settings
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::days(self.session_ttl_days)
    }

    /// Set-Cookie value binding the browser to `session_id`
    pub fn session_cookie(&self, session_id: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.cookie_name,
            session_id,
            self.session_ttl().num_seconds()
        )
    }
}

/// Install the settings the server was started with
pub fn init_settings(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("Settings already initialized");
    }
}

/// Settings the server was started with, or the defaults
pub fn current() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}
