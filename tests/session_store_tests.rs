// tests/session_store_tests.rs
// Session store and cart operations, exercised without HTTP

use chrono::{Duration, Utc};
use quote_cart::fixtures::carts::{messy_session_value, plate};
use quote_cart::fixtures::{carts::TwoPlateCart, CartFixture};
use quote_cart::web_app::api::cart_ops;
use quote_cart::web_app::api::session::{SessionId, SessionStore};
use quote_cart::web_app::api::settings::Settings;
use quote_cart::web_app::model::*;
use quote_cart::web_app::state::store_cart;

fn store() -> SessionStore {
    SessionStore::new(Settings::default().session_ttl())
}

#[test]
fn test_sessions_do_not_share_carts() -> anyhow::Result<()> {
    let store = store();
    let alice = SessionId::new_random();
    let bob = SessionId::new_random();

    cart_ops::add_line(&store, alice, plate("304", 0.25, 4.0, 1.0, 3))?;

    assert_eq!(cart_ops::load_cart(&store, alice)?.len(), 1);
    assert!(cart_ops::load_cart(&store, bob)?.is_empty());
    assert_eq!(store.len(), 2);
    Ok(())
}

#[test]
fn test_events_apply_to_stored_cart() -> anyhow::Result<()> {
    let store = store();
    let id = SessionId::new_random();
    store.with_session(id, |session| store_cart(session, &TwoPlateCart::cart()))?;

    let transition = cart_ops::apply_event(&store, id, &CartEvent::RemoveRequested("a".to_string()))?;
    assert!(transition.rerender);

    cart_ops::apply_event(&store, id, &CartEvent::QuantityChanged("b".to_string(), 5))?;

    let cart = cart_ops::load_cart(&store, id)?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items[0].line_id, "b");
    assert_eq!(cart.items[0].inputs.quantity, 5);
    Ok(())
}

#[test]
fn test_add_request_leaves_cart_alone() -> anyhow::Result<()> {
    let store = store();
    let id = SessionId::new_random();
    store.with_session(id, |session| store_cart(session, &TwoPlateCart::cart()))?;

    let transition = cart_ops::apply_event(&store, id, &CartEvent::AddItemRequested)?;
    assert_eq!(transition.navigate_to, Some(Page::NewQuote));
    assert_eq!(cart_ops::load_cart(&store, id)?, TwoPlateCart::cart());
    Ok(())
}

#[test]
fn test_malformed_stored_cart_is_tolerated() -> anyhow::Result<()> {
    let store = store();
    let id = SessionId::new_random();
    store.with_session(id, |session| session.set(CART_KEY, messy_session_value()))?;

    let cart = cart_ops::load_cart(&store, id)?;
    assert_eq!(cart.len(), 3);
    assert!(cart.items.iter().all(|item| item.inputs.quantity >= 1));

    // Editing rewrites the whole cart in its normalized form
    cart_ops::apply_event(&store, id, &CartEvent::QuantityChanged("line-1".to_string(), 2))?;
    let stored = store.with_session(id, |session| session.get(CART_KEY).cloned())?;
    assert_eq!(stored, Some(cart_ops::load_cart(&store, id)?.to_value()));
    Ok(())
}

#[test]
fn test_concurrent_adds_to_one_session() -> anyhow::Result<()> {
    let store = store();
    let id = SessionId::new_random();

    std::thread::scope(|scope| {
        for n in 0..8 {
            let store = &store;
            scope.spawn(move || {
                cart_ops::add_line(store, id, plate("316", 0.125, 3.0, 0.5, n + 1))
            });
        }
    });

    let cart = cart_ops::load_cart(&store, id)?;
    assert_eq!(cart.len(), 8);

    let mut ids: Vec<&str> = cart.items.iter().map(|i| i.line_id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    Ok(())
}

#[test]
fn test_purge_only_drops_idle_sessions() -> anyhow::Result<()> {
    let store = SessionStore::new(Duration::days(14));
    let idle = SessionId::new_random();
    let active = SessionId::new_random();

    store.with_session(idle, |session| session.touch(Utc::now() - Duration::days(15)))?;
    cart_ops::load_cart(&store, active)?;

    assert_eq!(store.purge_expired(Utc::now()), 1);
    assert!(!store.contains(idle));
    assert!(store.contains(active));
    assert_eq!(store.purge_expired(Utc::now()), 0);
    Ok(())
}

#[test]
fn test_session_cookie_format() {
    let settings = Settings::default();
    let id = SessionId::new_random();
    let cookie = settings.session_cookie(&id.to_string());

    assert!(cookie.starts_with(&format!("oplates_session={}", id)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains(&format!("Max-Age={}", 14 * 24 * 60 * 60)));
}
