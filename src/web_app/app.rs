// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the shared auth refresh signal, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::AuthRefresh;
use crate::web_app::pages::{NewQuotePage, QuoteCartPage};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Auth refresh context shared by the sidebar and the login gates
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(AuthRefresh::new());

    view! {
        <Title text="O-Plates Quote Cart" />
        <Meta name="description" content="Multi-line quotes for configured orifice plates" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/quote_cart.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=QuoteCartPage />
                <Route path=path!("/cart") view=QuoteCartPage />
                <Route path=path!("/quote") view=NewQuotePage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/cart"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Quote Cart"
                </a>
            </div>
        </div>
    }
}
