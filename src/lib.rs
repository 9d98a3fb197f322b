// lib.rs - Root module for the quote_cart library
//
// The same library is compiled twice: natively with `ssr` for the server
// binary, and to WASM with `hydrate` for the browser.

#![recursion_limit = "256"]

/// Sample carts shared by the unit and integration tests
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: attach to the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
