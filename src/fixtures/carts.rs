// fixtures/carts.rs
//
// Sample carts built from realistic plate configurations: the two-line
// steel/aluminum walk-through, a larger order with extra configuration keys,
// and a stored payload that is deliberately malformed.

use serde_json::{json, Value};

use crate::fixtures::CartFixture;
use crate::web_app::model::{Cart, LineInputs, LineItem};

/// Build the inputs of one plate line
pub fn plate(material: &str, thickness: f64, paddle_dia: f64, bore_dia: f64, quantity: u32) -> LineInputs {
    LineInputs {
        material: Some(material.to_string()),
        thickness: Some(thickness),
        paddle_dia: Some(paddle_dia),
        bore_dia: Some(bore_dia),
        handle_label: None,
        quantity,
        ..LineInputs::default()
    }
}

/// Steel "a" (qty 2) followed by aluminum "b" (qty 1)
pub struct TwoPlateCart;

impl CartFixture for TwoPlateCart {
    fn cart() -> Cart {
        Cart::new(vec![
            LineItem::new("a", plate("Steel", 0.25, 4.0, 1.0, 2)),
            LineItem::new("b", plate("Aluminum", 0.5, 6.0, 1.5, 1)),
        ])
    }
}

/// Five lines across the material catalogue, with labels and the extra
/// configuration keys the quote page stores
pub struct ShopOrderCart;

impl CartFixture for ShopOrderCart {
    fn cart() -> Cart {
        let materials = ["304", "316", "Carbon Steel", "Monel", "Hastelloy"];
        Cart::new(
            materials
                .iter()
                .enumerate()
                .map(|(i, material)| {
                    let mut inputs = plate(material, 0.125, 3.0 + i as f64, 0.75, (i as u32) + 1);
                    if i % 2 == 0 {
                        inputs.handle_label = Some(format!("Line {} inlet", i + 1));
                    }
                    inputs.extra.insert("bore_tolerance".into(), json!(0.005));
                    inputs.extra.insert("ships_in_days".into(), json!(21));
                    inputs.extra.insert("chamfer".into(), json!(i % 2 == 1));
                    LineItem::new(format!("shop-{}", i + 1), inputs)
                })
                .collect(),
        )
    }
}

/// What another page might have left under the `cart` key: a missing id,
/// string numbers, a zero quantity and an entry that is not an object
pub fn messy_session_value() -> Value {
    json!([
        {
            "line_id": "m1",
            "inputs": { "material": "316", "thickness": "0.375", "paddle_dia": 5, "bore_dia": 2, "quantity": 0 }
        },
        {
            "inputs": { "material": "Monel", "handle_label": "", "quantity": "4" }
        },
        42
    ])
}
