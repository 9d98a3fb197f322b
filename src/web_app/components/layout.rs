// web_app/components/layout.rs - Page chrome
//
// Header with navigation, the login sidebar on the left, page body on the right.

use leptos::prelude::*;

use super::auth::AuthSidebar;
use crate::web_app::model::Page;

/// Shared layout for every page
#[component]
pub fn PageLayout(
    /// Page heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white border-b border-gray-200 sticky top-0 z-10">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <span class="text-xl font-bold text-gray-900">"O-Plates"</span>
                    <nav class="flex gap-6 text-sm font-medium">
                        <a href=Page::QuoteCart.path() class="text-gray-600 hover:text-blue-600">"Quote Cart"</a>
                        <a href=Page::NewQuote.path() class="text-gray-600 hover:text-blue-600">"New Quote"</a>
                    </nav>
                </div>
            </header>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex flex-col lg:flex-row gap-8">
                <AuthSidebar />
                <main class="flex-1 min-w-0">
                    <h1 class="text-3xl font-bold text-gray-900 mb-6">{title}</h1>
                    {children()}
                </main>
            </div>
        </div>
    }
}
