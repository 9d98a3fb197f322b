// web_app/api/cart_ops.rs - Cart and auth operations against the session store
//
// Each function loads one session, runs a pure transition from
// web_app::state and writes the result back, all under the store's lock.
// The server functions are thin wrappers over these.

use uuid::Uuid;

use super::session::{SessionId, SessionStore};
use crate::web_app::model::*;
use crate::web_app::state::{self, Result};

/// Current cart, initializing it on first access
pub fn load_cart(store: &SessionStore, id: SessionId) -> Result<Cart> {
    store.with_session(id, |session| {
        let cart = state::init_cart(session);
        tracing::debug!("Session {} cart has {} lines", id, cart.len());
        cart
    })
}

/// Dispatch a page event and store the resulting cart
pub fn apply_event(store: &SessionStore, id: SessionId, event: &CartEvent) -> Result<CartTransition> {
    store.with_session(id, |session| {
        let current = state::init_cart(session);
        let transition = state::dispatch(&current, event);
        state::store_cart(session, &transition.cart);

        tracing::info!(
            "Session {} applied {:?}: {} -> {} lines",
            id,
            event,
            current.len(),
            transition.cart.len()
        );
        transition
    })
}

/// Append a freshly configured plate under a new unique id
pub fn add_line(store: &SessionStore, id: SessionId, inputs: LineInputs) -> Result<LineItem> {
    store.with_session(id, |session| -> Result<LineItem> {
        let current = state::init_cart(session);
        let mut item = LineItem::new(Uuid::new_v4().to_string(), inputs);
        item.inputs.quantity = item.inputs.quantity.max(1);

        let next = state::append_line(&current, item.clone())?;
        state::store_cart(session, &next);

        tracing::info!("Session {} added line {} ({} lines)", id, item.line_id, next.len());
        Ok(item)
    })?
}

pub fn auth_state(store: &SessionStore, id: SessionId) -> Result<AuthState> {
    store.with_session(id, |session| session.auth.clone())
}

/// Sign the session in under `email`
pub fn log_in(store: &SessionStore, id: SessionId, email: &str) -> Result<AuthState> {
    let email = state::normalize_email(email)?;
    store.with_session(id, |session| {
        tracing::info!("Session {} logged in as {}", id, email);
        session.auth = AuthState { email: Some(email) };
        session.auth.clone()
    })
}

/// Sign the session out; the cart stays with the session
pub fn log_out(store: &SessionStore, id: SessionId) -> Result<AuthState> {
    store.with_session(id, |session| {
        tracing::info!("Session {} logged out", id);
        session.auth = AuthState::default();
        session.auth.clone()
    })
}
