// web_app/state.rs - Cart state transitions
//
// Pure functions over the session state and the cart. Nothing in here
// renders or talks to the network, so every transition can be exercised
// directly from tests. The server functions load a session, call into this
// module and store the result.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::web_app::model::*;

/// Errors raised by cart and session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("line item '{0}' is already in the cart")]
    DuplicateLineId(String),

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("invalid plate configuration: {0}")]
    InvalidInput(String),

    #[error("log in to manage the quote cart")]
    NotLoggedIn,

    #[error("session store not available")]
    StoreUnavailable,
}

pub type Result<T> = std::result::Result<T, CartError>;

/// Everything one browser session owns
///
/// Values are kept by key, the way the pages share state with each other.
/// The cart page only touches [`CART_KEY`].
#[derive(Clone, Debug)]
pub struct SessionState {
    values: Map<String, Value>,
    pub auth: AuthState,
    pub last_seen: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl SessionState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            values: Map::new(),
            auth: AuthState::default(),
            last_seen: now,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }
}

/// Make sure the session holds a cart and return it
///
/// A missing entry, or one that is not a sequence, is replaced by an empty
/// sequence. Calling this on a session that already has a cart leaves its
/// items and their order alone.
pub fn init_cart(session: &mut SessionState) -> Cart {
    if let Some(stored) = session.get(CART_KEY) {
        if let Some(cart) = Cart::from_value(stored) {
            return cart;
        }
        tracing::warn!("Stored cart is not a sequence, resetting to empty");
    } else {
        tracing::debug!("No cart in session yet, starting empty");
    }

    session.set(CART_KEY, Value::Array(Vec::new()));
    Cart::default()
}

/// Write the cart back under [`CART_KEY`]
pub fn store_cart(session: &mut SessionState, cart: &Cart) {
    session.set(CART_KEY, cart.to_value());
}

/// Set the quantity of one line, clamped to >= 1
///
/// Every other line is returned unchanged. An unknown id is a no-op.
pub fn set_quantity(cart: &Cart, line_id: &str, requested: i64) -> Cart {
    let quantity = normalize_quantity(requested);
    Cart::new(
        cart.items
            .iter()
            .map(|item| {
                if item.line_id == line_id {
                    let mut updated = item.clone();
                    updated.inputs.quantity = quantity;
                    updated
                } else {
                    item.clone()
                }
            })
            .collect(),
    )
}

/// Drop the line with a matching id, keeping the order of the rest
pub fn remove_line(cart: &Cart, line_id: &str) -> Cart {
    Cart::new(
        cart.items
            .iter()
            .filter(|item| item.line_id != line_id)
            .cloned()
            .collect(),
    )
}

pub fn clear() -> Cart {
    Cart::default()
}

/// Append a new line, rejecting ids the cart already holds
pub fn append_line(cart: &Cart, item: LineItem) -> Result<Cart> {
    if cart.contains(&item.line_id) {
        return Err(CartError::DuplicateLineId(item.line_id));
    }
    let mut items = cart.items.clone();
    items.push(item);
    Ok(Cart::new(items))
}

/// Apply one page event to the current cart
///
/// Clear and Remove ask for a redraw; a quantity edit is already reflected
/// by the input that produced it, so it does not.
pub fn dispatch(cart: &Cart, event: &CartEvent) -> CartTransition {
    match event {
        CartEvent::AddItemRequested => CartTransition {
            cart: cart.clone(),
            navigate_to: Some(Page::NewQuote),
            rerender: false,
        },
        CartEvent::ClearRequested => CartTransition {
            cart: clear(),
            navigate_to: None,
            rerender: true,
        },
        CartEvent::RemoveRequested(line_id) => CartTransition {
            cart: remove_line(cart, line_id),
            navigate_to: None,
            rerender: true,
        },
        CartEvent::QuantityChanged(line_id, requested) => CartTransition {
            cart: set_quantity(cart, line_id, *requested),
            navigate_to: None,
            rerender: false,
        },
    }
}

/// Validate and normalize a sign-in email
pub fn normalize_email(email: &str) -> Result<String> {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(trimmed.to_string())
        }
        _ => Err(CartError::InvalidEmail(trimmed.to_string())),
    }
}

/// Raw values from the new quote form, as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub material: String,
    pub thickness: String,
    pub paddle_dia: String,
    pub bore_dia: String,
    pub handle_label: String,
    pub handle_width: String,
    pub handle_length_from_bore: String,
    pub chamfer: bool,
    pub quantity: String,
    pub bore_tolerance: String,
    pub ships_in_days: String,
}

fn parse_positive(field: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CartError::InvalidInput(format!("{field} must be a positive number"))),
    }
}

fn parse_non_negative(field: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(CartError::InvalidInput(format!("{field} must be zero or more"))),
    }
}

impl QuoteForm {
    /// Validate the form into line inputs
    ///
    /// The thickness must be one stocked for the chosen material, the bore
    /// must fit inside the paddle, and the handle must reach past the paddle
    /// radius. Quantity is clamped to >= 1.
    pub fn to_inputs(&self) -> Result<LineInputs> {
        let material = self.material.trim();
        if !MATERIALS.contains(&material) {
            return Err(CartError::InvalidInput(format!("unknown material: {material}")));
        }

        let thickness = parse_positive("thickness", &self.thickness)?;
        if !thicknesses_for(material).contains(&thickness) {
            return Err(CartError::InvalidInput(format!(
                "{material} is not stocked in {thickness} in"
            )));
        }

        let paddle_dia = parse_positive("paddle diameter", &self.paddle_dia)?;
        let bore_dia = parse_positive("bore diameter", &self.bore_dia)?;
        if bore_dia >= paddle_dia {
            return Err(CartError::InvalidInput(
                "bore diameter must be smaller than the paddle diameter".to_string(),
            ));
        }

        let handle_width = parse_non_negative("handle width", &self.handle_width)?;
        let handle_length = parse_non_negative("handle length from bore", &self.handle_length_from_bore)?;
        if handle_length <= paddle_dia / 2.0 {
            return Err(CartError::InvalidInput(
                "handle length from bore must be longer than the paddle radius".to_string(),
            ));
        }

        let quantity = normalize_quantity(self.quantity.trim().parse::<i64>().unwrap_or(1));
        let label = self.handle_label.trim();

        let mut extra = Map::new();
        extra.insert("handle_width".into(), Value::from(handle_width));
        extra.insert("handle_length_from_bore".into(), Value::from(handle_length));
        extra.insert("chamfer".into(), Value::Bool(self.chamfer));
        if let Ok(tolerance) = self.bore_tolerance.trim().parse::<f64>() {
            extra.insert("bore_tolerance".into(), Value::from(tolerance));
        }
        if let Ok(days) = self.ships_in_days.trim().parse::<u32>() {
            extra.insert("ships_in_days".into(), Value::from(days));
        }

        Ok(LineInputs {
            material: Some(material.to_string()),
            thickness: Some(thickness),
            paddle_dia: Some(paddle_dia),
            bore_dia: Some(bore_dia),
            handle_label: (!label.is_empty()).then(|| label.to_string()),
            quantity,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str, quantity: u32) -> LineItem {
        LineItem::new(
            id,
            LineInputs {
                material: Some("304".to_string()),
                quantity,
                ..LineInputs::default()
            },
        )
    }

    #[test]
    fn test_init_cart_on_fresh_session() {
        let mut session = SessionState::default();
        let cart = init_cart(&mut session);
        assert!(cart.is_empty());
        assert_eq!(session.get(CART_KEY), Some(&json!([])));
    }

    #[test]
    fn test_init_cart_replaces_non_sequence() {
        let mut session = SessionState::default();
        session.set(CART_KEY, json!("not a list"));
        let cart = init_cart(&mut session);
        assert!(cart.is_empty());
        assert_eq!(session.get(CART_KEY), Some(&json!([])));
    }

    #[test]
    fn test_store_then_init_keeps_items() {
        let mut session = SessionState::default();
        let cart = Cart::new(vec![item("a", 2), item("b", 1)]);
        store_cart(&mut session, &cart);
        assert_eq!(init_cart(&mut session), cart);
    }

    #[test]
    fn test_dispatch_add_item_navigates_without_mutation() {
        let cart = Cart::new(vec![item("a", 2)]);
        let transition = dispatch(&cart, &CartEvent::AddItemRequested);
        assert_eq!(transition.cart, cart);
        assert_eq!(transition.navigate_to, Some(Page::NewQuote));
        assert!(!transition.rerender);
    }

    #[test]
    fn test_dispatch_quantity_change_has_no_rerender() {
        let cart = Cart::new(vec![item("a", 2)]);
        let transition = dispatch(&cart, &CartEvent::QuantityChanged("a".into(), 7));
        assert_eq!(transition.cart.items[0].inputs.quantity, 7);
        assert!(!transition.rerender);
        assert!(transition.navigate_to.is_none());
    }

    fn form() -> QuoteForm {
        QuoteForm {
            material: "316".into(),
            thickness: "0.25".into(),
            paddle_dia: "4".into(),
            bore_dia: "1.5".into(),
            handle_label: "  FT-101 ".into(),
            handle_width: "1.5".into(),
            handle_length_from_bore: "9".into(),
            chamfer: true,
            quantity: "3".into(),
            bore_tolerance: "0.002".into(),
            ships_in_days: "14".into(),
        }
    }

    #[test]
    fn test_quote_form_to_inputs() {
        let inputs = form().to_inputs().unwrap();
        assert_eq!(inputs.material.as_deref(), Some("316"));
        assert_eq!(inputs.thickness, Some(0.25));
        assert_eq!(inputs.bore_dia, Some(1.5));
        assert_eq!(inputs.handle_label.as_deref(), Some("FT-101"));
        assert_eq!(inputs.quantity, 3);
        assert_eq!(inputs.extra.get("ships_in_days"), Some(&json!(14)));
        assert_eq!(inputs.extra.get("bore_tolerance"), Some(&json!(0.002)));
        assert_eq!(inputs.extra.get("handle_width"), Some(&json!(1.5)));
        assert_eq!(inputs.extra.get("handle_length_from_bore"), Some(&json!(9.0)));
        assert_eq!(inputs.extra.get("chamfer"), Some(&json!(true)));
    }

    #[test]
    fn test_quote_form_rejects_bad_values() {
        let mut bad = form();
        bad.material = "Titanium".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        let mut bad = form();
        bad.thickness = "0.3".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        let mut bad = form();
        bad.bore_dia = "4".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        let mut bad = form();
        bad.paddle_dia = "".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        let mut bad = form();
        bad.material = "Monel".into();
        bad.thickness = "0.375".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        let mut bad = form();
        bad.handle_width = "-0.5".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));

        // Paddle 4 in: radius 2 in, so the handle must be longer than 2 in
        let mut bad = form();
        bad.handle_length_from_bore = "2".into();
        assert!(matches!(bad.to_inputs(), Err(CartError::InvalidInput(_))));
        bad.handle_length_from_bore = "2.01".into();
        assert!(bad.to_inputs().is_ok());
    }

    #[test]
    fn test_quote_form_blank_label_and_quantity() {
        let mut f = form();
        f.handle_label = "   ".into();
        f.quantity = "-2".into();
        let inputs = f.to_inputs().unwrap();
        assert!(inputs.handle_label.is_none());
        assert_eq!(inputs.quantity, 1);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  buyer@example.com ").unwrap(),
            "buyer@example.com"
        );
        assert!(matches!(normalize_email(""), Err(CartError::InvalidEmail(_))));
        assert!(matches!(normalize_email("nobody"), Err(CartError::InvalidEmail(_))));
        assert!(matches!(normalize_email("@example.com"), Err(CartError::InvalidEmail(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CartError::DuplicateLineId("a".into()).to_string(),
            "line item 'a' is already in the cart"
        );
        assert_eq!(
            CartError::StoreUnavailable.to_string(),
            "session store not available"
        );
    }
}
