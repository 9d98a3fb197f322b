// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Notice, Expander, etc.)
// - cart.rs: Quote cart components (LineItemCard, QuantityInput, NextActions)
// - auth.rs: Login sidebar and the login gate
// - layout.rs: Header, sidebar and body frame shared by every page

pub mod auth;
pub mod cart;
pub mod common;
pub mod layout;

// Re-export commonly used components for convenience
pub use auth::*;
pub use cart::*;
pub use common::*;
pub use layout::*;
