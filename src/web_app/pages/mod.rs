// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - QuoteCartPage: Line items, quantity edits and the next-action placeholders
// - NewQuotePage: Configure one plate and add it to the cart

pub mod cart;
pub mod quote;

// Re-export page components
pub use cart::QuoteCartPage;
pub use quote::NewQuotePage;
