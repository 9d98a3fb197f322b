// web_app/view_model.rs - What the cart page shows, computed from the cart
//
// The components only lay out what this module produces. Keeping the text
// here means the empty-cart guard, the count label and the per-line headings
// can be checked without a reactive runtime.

use crate::web_app::model::{Cart, LineItem};

pub const EMPTY_CART_MESSAGE: &str = "Your Quote Cart is empty.";
pub const EMPTY_CART_HINT: &str = "Go to Quote and click Add to Quote to build a multi-line quote.";
pub const LOGIN_PROMPT: &str = "Log in in the sidebar to manage quote carts.";

pub const PDF_ACTION_LABEL: &str = "Generate PDF Quote";
pub const PDF_ACTION_CAPTION: &str = "PDF summaries of the cart are coming in a later release.";
pub const CHECKOUT_ACTION_LABEL: &str = "Checkout All Items";
pub const CHECKOUT_ACTION_CAPTION: &str = "Checkout for the whole cart is coming in a later release.";

pub const FOOTER_TEXT: &str = "This MVP keeps your cart for the current session only. \
                               Saved carts, PDF quotes and checkout come later.";

/// Rendered form of a single line
#[derive(Clone, Debug, PartialEq)]
pub struct LineView {
    pub line_id: String,
    /// 1-based position in the cart
    pub index: usize,
    pub heading: String,
    pub label_caption: String,
    pub quantity: u32,
    pub config_json: String,
}

/// Rendered form of the whole cart
#[derive(Clone, Debug, PartialEq)]
pub enum CartView {
    Empty {
        message: &'static str,
        hint: &'static str,
    },
    Items {
        count_label: String,
        lines: Vec<LineView>,
    },
}

fn display_or_none<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl LineView {
    pub fn from_item(position: usize, item: &LineItem) -> Self {
        let inputs = &item.inputs;
        let index = position + 1;

        let heading = format!(
            "{}. {} | {} in | Paddle {} in | Bore {} in",
            index,
            display_or_none(inputs.material.as_deref()),
            display_or_none(inputs.thickness),
            display_or_none(inputs.paddle_dia),
            display_or_none(inputs.bore_dia),
        );

        let config_json = serde_json::to_string_pretty(inputs).unwrap_or_else(|_| "{}".to_string());

        Self {
            line_id: item.line_id.clone(),
            index,
            heading,
            label_caption: format!("Label: {}", inputs.label_or_placeholder()),
            quantity: inputs.quantity,
            config_json,
        }
    }
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return CartView::Empty {
                message: EMPTY_CART_MESSAGE,
                hint: EMPTY_CART_HINT,
            };
        }

        CartView::Items {
            count_label: format!("Line items ({})", cart.len()),
            lines: cart
                .items
                .iter()
                .enumerate()
                .map(|(position, item)| LineView::from_item(position, item))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty { .. })
    }
}

/// Read the quantity box's text as a whole number
///
/// Blank or non-numeric text yields `None` so the edit is ignored; fractions
/// are truncated. Clamping to >= 1 happens in the cart transition.
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::LineInputs;

    #[test]
    fn test_heading_format() {
        let item = LineItem::new(
            "a",
            LineInputs {
                material: Some("Carbon Steel".to_string()),
                thickness: Some(0.25),
                paddle_dia: Some(4.0),
                bore_dia: Some(1.0),
                quantity: 2,
                ..LineInputs::default()
            },
        );

        let line = LineView::from_item(0, &item);
        assert_eq!(line.index, 1);
        assert_eq!(line.heading, "1. Carbon Steel | 0.25 in | Paddle 4 in | Bore 1 in");
        assert_eq!(line.label_caption, "Label: No label");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_missing_fields_render_none() {
        let item = LineItem::new("x", LineInputs::default());
        let line = LineView::from_item(4, &item);
        assert_eq!(line.heading, "5. None | None in | Paddle None in | Bore None in");
    }

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input("4"), Some(4));
        assert_eq!(parse_quantity_input(" 12 "), Some(12));
        assert_eq!(parse_quantity_input("2.9"), Some(2));
        assert_eq!(parse_quantity_input("0"), Some(0));
        assert_eq!(parse_quantity_input(""), None);
        assert_eq!(parse_quantity_input("two"), None);
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from_cart(&Cart::default());
        assert!(view.is_empty());
    }
}
