// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the browser and the server functions, and
// they are also what the session store keeps under the `cart` key.
//
// Decoding is deliberately lenient: a cart written by another page may be
// missing fields or carry odd types, and the cart page has to render it
// anyway instead of failing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session key the cart lives under
pub const CART_KEY: &str = "cart";

/// Placeholder shown when a line has no handle label
pub const NO_LABEL: &str = "No label";

/// Configuration of one plate line
///
/// The named fields are the ones the cart page reads. Everything else the
/// quote page stored (tolerances, lead time, chamfer...) is carried in
/// `extra` so the configuration panel can show it untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct LineInputs {
    pub material: Option<String>,
    pub thickness: Option<f64>,
    pub paddle_dia: Option<f64>,
    pub bore_dia: Option<f64>,
    pub handle_label: Option<String>,
    pub quantity: u32,
    pub extra: Map<String, Value>,
}

impl Default for LineInputs {
    fn default() -> Self {
        Self {
            material: None,
            thickness: None,
            paddle_dia: None,
            bore_dia: None,
            handle_label: None,
            quantity: 1,
            extra: Map::new(),
        }
    }
}

impl LineInputs {
    /// Handle label for display, falling back to "No label" when blank
    pub fn label_or_placeholder(&self) -> &str {
        match self.handle_label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => NO_LABEL,
        }
    }
}

/// Clamp a requested quantity to the valid range (>= 1)
pub fn normalize_quantity(requested: i64) -> u32 {
    requested.clamp(1, i64::from(u32::MAX)) as u32
}

fn lenient_f64(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn lenient_quantity(value: Option<Value>) -> u32 {
    let requested = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(1),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(1),
        _ => 1,
    };
    normalize_quantity(requested)
}

impl From<Map<String, Value>> for LineInputs {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            material: lenient_string(map.remove("material")),
            thickness: lenient_f64(map.remove("thickness")),
            paddle_dia: lenient_f64(map.remove("paddle_dia")),
            bore_dia: lenient_f64(map.remove("bore_dia")),
            handle_label: lenient_string(map.remove("handle_label")),
            quantity: lenient_quantity(map.remove("quantity")),
            extra: map,
        }
    }
}

impl From<LineInputs> for Map<String, Value> {
    fn from(inputs: LineInputs) -> Self {
        let mut map = inputs.extra;
        map.insert("material".into(), inputs.material.map_or(Value::Null, Value::String));
        map.insert("thickness".into(), number_or_null(inputs.thickness));
        map.insert("paddle_dia".into(), number_or_null(inputs.paddle_dia));
        map.insert("bore_dia".into(), number_or_null(inputs.bore_dia));
        map.insert("handle_label".into(), inputs.handle_label.map_or(Value::Null, Value::String));
        map.insert("quantity".into(), Value::from(inputs.quantity));
        map
    }
}

fn number_or_null(value: Option<f64>) -> Value {
    value
        .and_then(serde_json::Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// One configured plate in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_id: String,
    #[serde(default)]
    pub inputs: LineInputs,
}

impl LineItem {
    pub fn new(line_id: impl Into<String>, inputs: LineInputs) -> Self {
        Self {
            line_id: line_id.into(),
            inputs,
        }
    }

    /// Decode one stored entry, tolerating missing or malformed fields
    ///
    /// `position` is the entry's index in the stored sequence and seeds the
    /// fallback `line-{position}` id when none was stored.
    pub fn from_value(value: &Value, position: usize) -> Self {
        let object = value.as_object();

        let line_id = object
            .and_then(|o| o.get("line_id"))
            .and_then(|id| match id {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| format!("line-{position}"));

        let inputs = object
            .and_then(|o| o.get("inputs"))
            .and_then(Value::as_object)
            .cloned()
            .map(LineInputs::from)
            .unwrap_or_default();

        Self { line_id, inputs }
    }
}

/// Ordered list of line items held in a session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<LineItem>,
}

impl Cart {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, line_id: &str) -> bool {
        self.items.iter().any(|item| item.line_id == line_id)
    }

    pub fn get(&self, line_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.line_id == line_id)
    }

    /// Decode a stored sequence; `None` when the value is not a sequence
    ///
    /// Line ids come out unique: an id already taken by an earlier entry
    /// (stored or fallback) gets a `-2`, `-3`, ... suffix.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entries = value.as_array()?;
        let mut taken = HashSet::with_capacity(entries.len());

        let items = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let mut item = LineItem::from_value(entry, position);
                if taken.contains(&item.line_id) {
                    let base = item.line_id.clone();
                    let mut n = 2;
                    while taken.contains(&format!("{base}-{n}")) {
                        n += 1;
                    }
                    item.line_id = format!("{base}-{n}");
                    tracing::warn!("Duplicate stored line id '{}', renamed to '{}'", base, item.line_id);
                }
                taken.insert(item.line_id.clone());
                item
            })
            .collect();

        Some(Self { items })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Array(Vec::new()))
    }
}

/// Pages the cart can hand control to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    QuoteCart,
    NewQuote,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::QuoteCart => "/cart",
            Page::NewQuote => "/quote",
        }
    }
}

/// User interactions on the cart page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    AddItemRequested,
    ClearRequested,
    RemoveRequested(String),
    QuantityChanged(String, i64),
}

/// Result of dispatching one event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartTransition {
    pub cart: Cart,
    pub navigate_to: Option<Page>,
    /// The page must be redrawn from fresh state before further interaction
    pub rerender: bool,
}

/// Who is signed in to the session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub email: Option<String>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.email.is_some()
    }
}

/// Material catalogue offered by the new quote form
pub const MATERIALS: [&str; 5] = ["304", "316", "Carbon Steel", "Monel", "Hastelloy"];

/// Plate thicknesses (inches) stocked for each material
pub const MATERIAL_THICKNESSES: [(&str, &[f64]); 5] = [
    ("304", &[0.125, 0.25, 0.375]),
    ("316", &[0.125, 0.25, 0.375]),
    ("Carbon Steel", &[0.125, 0.25, 0.375]),
    ("Monel", &[0.125, 0.25]),
    ("Hastelloy", &[0.125, 0.25, 0.375]),
];

/// Thicknesses offered for `material`; empty for an unknown material
pub fn thicknesses_for(material: &str) -> &'static [f64] {
    MATERIAL_THICKNESSES
        .iter()
        .find(|(name, _)| *name == material)
        .map_or(&[], |(_, thicknesses)| *thicknesses)
}
