// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// The bodies only resolve the caller's session and hand off to
// api::cart_ops; the cart rules themselves live in web_app::state.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
use crate::web_app::api::session::{SessionId, SessionStore};

#[cfg(feature = "ssr")]
fn server_error(e: crate::web_app::state::CartError) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// Resolve the store and the caller's session id
///
/// The id comes from the session cookie, or from the request extensions
/// when the session middleware minted one for this request.
#[cfg(feature = "ssr")]
async fn session() -> Result<(&'static SessionStore, SessionId), ServerFnError> {
    use actix_web::{HttpMessage, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{session, settings};
    use crate::web_app::state::CartError;

    let store = session::get_store().ok_or_else(|| server_error(CartError::StoreUnavailable))?;

    // Pinned session (for testing)
    if let Some(id) = session::test_session() {
        return Ok((store, id));
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            let cookie_name = settings::current().cookie_name;

            if let Some(id) = req
                .cookie(&cookie_name)
                .and_then(|cookie| SessionId::parse(cookie.value()))
            {
                return Ok((store, id));
            }

            if let Some(id) = req.extensions().get::<SessionId>().copied() {
                tracing::debug!("Using session {} minted for this request", id);
                return Ok((store, id));
            }

            tracing::warn!("Request carries no session cookie");
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Session not available"))
}

/// Same as [`session`], but fails unless the session is logged in
#[cfg(feature = "ssr")]
async fn logged_in_session() -> Result<(&'static SessionStore, SessionId), ServerFnError> {
    use crate::web_app::api::cart_ops;
    use crate::web_app::state::CartError;

    let (store, id) = session().await?;
    let auth = cart_ops::auth_state(store, id).map_err(server_error)?;
    if !auth.is_logged_in() {
        return Err(server_error(CartError::NotLoggedIn));
    }
    Ok((store, id))
}

/// Load the session's cart, creating an empty one on first access
#[server(GetCart, "/api")]
pub async fn get_cart() -> Result<Cart, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = logged_in_session().await?;
    cart_ops::load_cart(store, id).map_err(server_error)
}

/// Dispatch one cart page event against the session's cart
#[server(name = ApplyCartEvent, prefix = "/api", input = Json)]
pub async fn apply_cart_event(event: CartEvent) -> Result<CartTransition, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = logged_in_session().await?;
    let result = cart_ops::apply_event(store, id, &event);

    if let Err(e) = &result {
        tracing::error!("Cart event {:?} failed: {}", event, e);
    }

    result.map_err(server_error)
}

/// Append a configured plate to the session's cart
#[server(name = AddToQuote, prefix = "/api", input = Json)]
pub async fn add_to_quote(inputs: LineInputs) -> Result<LineItem, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = logged_in_session().await?;
    cart_ops::add_line(store, id, inputs).map_err(server_error)
}

/// Who is signed in to this session
#[server(CurrentUser, "/api")]
pub async fn current_user() -> Result<AuthState, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = session().await?;
    cart_ops::auth_state(store, id).map_err(server_error)
}

/// Sign this session in
#[server(LogIn, "/api")]
pub async fn log_in(email: String) -> Result<AuthState, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = session().await?;
    cart_ops::log_in(store, id, &email).map_err(server_error)
}

/// Sign this session out
#[server(LogOut, "/api")]
pub async fn log_out() -> Result<AuthState, ServerFnError> {
    use crate::web_app::api::cart_ops;

    let (store, id) = session().await?;
    cart_ops::log_out(store, id).map_err(server_error)
}
