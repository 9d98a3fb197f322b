// web_app/api/session.rs - In-memory session store
//
// This module keeps one SessionState per browser session, keyed by the id
// carried in the session cookie. Nothing is written to disk: a restart
// starts every session over, same as a fresh browser session.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use actix_web::dev::ServiceRequest;
use actix_web::http::header::HeaderValue;
use actix_web::HttpMessage;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::settings::Settings;
use crate::web_app::state::{CartError, Result, SessionState};

static STORE: OnceLock<SessionStore> = OnceLock::new();
static TEST_SESSION_OVERRIDE: Mutex<Option<SessionId>> = Mutex::new(None);

/// Opaque id of one browser session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide registry of session states
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionState>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Run `f` against the session's state, creating it on first access
    ///
    /// The lock is held for the whole closure so one request's mutation is
    /// complete before the next request for the same session reads it.
    pub fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> T) -> Result<T> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().map_err(|_| CartError::StoreUnavailable)?;

        let state = sessions.entry(id).or_insert_with(|| {
            tracing::debug!("Creating session {}", id);
            SessionState::new(now)
        });
        state.touch(now);

        Ok(f(state))
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions
            .lock()
            .map(|sessions| sessions.contains_key(&id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|sessions| sessions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop sessions idle for longer than the store's TTL
    ///
    /// Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let Ok(mut sessions) = self.sessions.lock() else {
            return 0;
        };
        let before = sessions.len();
        sessions.retain(|_, state| now - state.last_seen <= self.ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!("Purged {} idle sessions", purged);
        }
        purged
    }
}

/// Initialize the global session store
pub fn init_store(store: SessionStore) {
    tracing::info!("Initializing global session store");
    if STORE.set(store).is_err() {
        tracing::warn!("Session store already initialized");
    } else {
        tracing::info!("Global session store initialized successfully");
    }
}

/// Get the global session store
pub fn get_store() -> Option<&'static SessionStore> {
    let store = STORE.get();
    if store.is_none() {
        tracing::warn!("Global session store is empty!");
    }
    store
}

/// Make sure an incoming request belongs to a session
///
/// Requests without a valid session cookie get a fresh id in their
/// extensions, and the Set-Cookie value for it is returned so the caller can
/// attach it to the response.
pub fn ensure_request_session(req: &ServiceRequest, settings: &Settings) -> Option<HeaderValue> {
    let has_session = req
        .cookie(&settings.cookie_name)
        .and_then(|cookie| SessionId::parse(cookie.value()))
        .is_some();
    if has_session {
        return None;
    }

    let id = SessionId::new_random();
    req.extensions_mut().insert(id);
    tracing::debug!("Minted session {} for {}", id, req.path());

    match HeaderValue::from_str(&settings.session_cookie(&id.to_string())) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Invalid session cookie header: {}", e);
            None
        }
    }
}

/// Pin every server function call to one session (tests only)
pub fn set_test_session(id: SessionId) {
    if let Ok(mut guard) = TEST_SESSION_OVERRIDE.lock() {
        *guard = Some(id);
    }
}

/// Session pinned by [`set_test_session`], if any
pub fn test_session() -> Option<SessionId> {
    TEST_SESSION_OVERRIDE.lock().ok().and_then(|guard| *guard)
}
