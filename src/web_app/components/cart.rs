// web_app/components/cart.rs - Quote cart components
//
// Components for the cart page including:
// - CartToolbar: "Add another plate" and "Clear cart"
// - EmptyCart: Shown instead of everything else when the cart is empty
// - LineItemCard: One line with quantity box, remove action and config panel
// - QuantityInput: Integer box that reports edits as they happen
// - NextActions: Disabled PDF/checkout placeholders
// - CartFooter: MVP boundary note
//
// All text comes from web_app::view_model; these only lay it out.

use leptos::prelude::*;

use super::common::{Button, Caption, Expander, JsonBlock, Notice, NoticeKind, SecondaryButton};
use crate::web_app::model::normalize_quantity;
use crate::web_app::view_model::*;

/// Top-of-page actions
#[component]
pub fn CartToolbar(
    /// Go to the new quote page
    on_add: Callback<()>,
    /// Empty the cart (no confirmation)
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3 mb-6">
            <Button on_click=on_add>"➕ Add another plate"</Button>
            <SecondaryButton on_click=on_clear>"🧹 Clear cart"</SecondaryButton>
        </div>
    }
}

/// Empty-cart message and hint
#[component]
pub fn EmptyCart(message: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <Notice message=message.to_string() kind=NoticeKind::Warning />
            <Notice message=hint.to_string() />
        </div>
    }
}

/// Whole-number quantity box (min 1, step 1)
///
/// Each committed edit is clamped to >= 1, shown back in the box and passed
/// to `on_change` right away.
#[component]
pub fn QuantityInput(
    line_id: String,
    /// Value to seed the box with
    quantity: u32,
    /// Receives (line_id, new quantity)
    on_change: Callback<(String, i64)>,
) -> impl IntoView {
    let current = RwSignal::new(quantity);

    view! {
        <label class="flex flex-col text-sm text-gray-600">
            "Qty"
            <input
                type="number"
                min="1"
                step="1"
                inputmode="numeric"
                class="mt-1 w-24 px-3 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none shadow-sm"
                prop:value=move || current.get().to_string()
                on:change=move |ev| {
                    match parse_quantity_input(&event_target_value(&ev)) {
                        Some(requested) => {
                            let clamped = normalize_quantity(requested);
                            current.set(clamped);
                            on_change.run((line_id.clone(), i64::from(clamped)));
                        }
                        // Restore the last good value
                        None => current.set(current.get_untracked()),
                    }
                }
            />
        </label>
    }
}

/// One bordered card per cart line
#[component]
pub fn LineItemCard(
    line: LineView,
    on_quantity: Callback<(String, i64)>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let remove_id = line.line_id.clone();

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5 mb-4">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4">
                <div class="flex-1 min-w-0">
                    <p class="font-bold text-gray-900">{line.heading.clone()}</p>
                    <Caption>{line.label_caption.clone()}</Caption>
                </div>
                <QuantityInput
                    line_id=line.line_id.clone()
                    quantity=line.quantity
                    on_change=on_quantity
                />
            </div>

            <div class="mt-3">
                <SecondaryButton on_click=Callback::new(move |()| on_remove.run(remove_id.clone()))>
                    "Remove"
                </SecondaryButton>
            </div>

            <Expander title="Show configuration JSON">
                <JsonBlock json=line.config_json.clone() />
            </Expander>
        </div>
    }
}

/// PDF and checkout, both always disabled in this version
#[component]
pub fn NextActions() -> impl IntoView {
    view! {
        <section class="mt-8">
            <h2 class="text-lg font-semibold text-gray-800 mb-4">"Next actions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <Button disabled=true class="w-full">{format!("📄 {}", PDF_ACTION_LABEL)}</Button>
                    <Caption>{PDF_ACTION_CAPTION}</Caption>
                </div>
                <div>
                    <Button disabled=true class="w-full">{format!("💳 {}", CHECKOUT_ACTION_LABEL)}</Button>
                    <Caption>{CHECKOUT_ACTION_CAPTION}</Caption>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CartFooter() -> impl IntoView {
    view! {
        <div class="mt-8">
            <Notice message=FOOTER_TEXT.to_string() />
        </div>
    }
}

/// Count label followed by every line, in cart order
#[component]
pub fn LineItemList(
    count_label: String,
    lines: Vec<LineView>,
    on_quantity: Callback<(String, i64)>,
    on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-lg font-semibold text-gray-800 mb-4">{count_label}</h2>
            {lines.into_iter().map(|line| view! {
                <LineItemCard line=line on_quantity=on_quantity on_remove=on_remove />
            }).collect_view()}
        </section>
    }
}
