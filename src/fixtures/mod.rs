// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable test setup. Instead of building the same cart by
// hand in every test, each fixture below builds it once and the unit tests,
// the integration tests and the component tests all reuse it.

pub mod carts;

use serde_json::Value;

use crate::web_app::model::Cart;

/// A named cart that tests can start from
pub trait CartFixture {
    /// The typed cart
    fn cart() -> Cart;

    /// The same cart as it sits in session state under the `cart` key
    fn session_value() -> Value {
        Self::cart().to_value()
    }
}
