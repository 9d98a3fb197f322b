// web_app/pages/cart.rs - Quote cart page
//
// Every button and quantity edit becomes a CartEvent sent to the server.
// The transition that comes back says whether to leave the page and whether
// the list must be fetched again; a quantity edit needs neither. Each
// dispatch applies its own transition as soon as its response arrives, so
// responses landing close together cannot hide one another.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{apply_cart_event, get_cart};
use crate::web_app::view_model::*;

/// Cart page, behind the login gate
#[component]
pub fn QuoteCartPage() -> impl IntoView {
    view! {
        <PageLayout title="Quote Cart">
            <p class="text-sm text-gray-500 mb-6">
                "Build a multi-line quote with multiple configured plates."
            </p>
            <RequireLogin message=LOGIN_PROMPT>
                <CartBody />
            </RequireLogin>
        </PageLayout>
    }
}

/// Where a stored transition takes the page
#[derive(Clone, Copy)]
struct TransitionSink {
    reload: RwSignal<u32>,
    navigate_to: RwSignal<Option<Page>>,
}

impl TransitionSink {
    fn new() -> Self {
        Self {
            reload: RwSignal::new(0),
            navigate_to: RwSignal::new(None),
        }
    }

    fn apply(&self, transition: &CartTransition) {
        if let Some(page) = transition.navigate_to {
            self.navigate_to.set(Some(page));
        }
        if transition.rerender {
            self.reload.update(|n| *n += 1);
        }
    }
}

#[component]
fn CartBody() -> impl IntoView {
    let sink = TransitionSink::new();
    let reload = sink.reload;
    let cart = Resource::new(move || reload.get(), |_| get_cart());

    let events = Action::new(move |event: &CartEvent| {
        let event = event.clone();
        async move {
            let result = apply_cart_event(event).await;
            if let Ok(transition) = &result {
                sink.apply(transition);
            }
            result
        }
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(page) = sink.navigate_to.get() {
            navigate(page.path(), Default::default());
        }
    });

    let send = move |event: CartEvent| {
        events.dispatch(event);
    };

    let on_add = Callback::new(move |()| send(CartEvent::AddItemRequested));
    let on_clear = Callback::new(move |()| send(CartEvent::ClearRequested));
    let on_remove = Callback::new(move |line_id: String| send(CartEvent::RemoveRequested(line_id)));
    let on_quantity = Callback::new(move |(line_id, quantity): (String, i64)| {
        send(CartEvent::QuantityChanged(line_id, quantity))
    });

    view! {
        <CartToolbar on_add=on_add on_clear=on_clear />

        {move || match events.value().get() {
            Some(Err(e)) => Some(view! { <ErrorDisplay error=e.to_string() /> }),
            _ => None,
        }}

        <Suspense fallback=move || view! { <Loading message="Loading cart..." /> }>
            {move || cart.get().map(|result| match result {
                Ok(cart) => match CartView::from_cart(&cart) {
                    CartView::Empty { message, hint } => {
                        view! { <EmptyCart message=message hint=hint /> }.into_any()
                    }
                    CartView::Items { count_label, lines } => view! {
                        <div>
                            <LineItemList
                                count_label=count_label
                                lines=lines
                                on_quantity=on_quantity
                                on_remove=on_remove
                            />
                            <NextActions />
                            <CartFooter />
                        </div>
                    }.into_any(),
                },
                Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
            })}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::state::dispatch;

    fn two_lines() -> Cart {
        Cart::new(vec![
            LineItem::new("a", LineInputs::default()),
            LineItem::new("b", LineInputs::default()),
        ])
    }

    #[test]
    fn test_rerender_survives_later_quantity_edit() {
        let owner = Owner::new();
        owner.with(|| {
            let sink = TransitionSink::new();
            let removed = dispatch(&two_lines(), &CartEvent::RemoveRequested("a".into()));
            let edited = dispatch(&removed.cart, &CartEvent::QuantityChanged("b".into(), 4));

            sink.apply(&removed);
            sink.apply(&edited);

            assert_eq!(sink.reload.get_untracked(), 1);
            assert_eq!(sink.navigate_to.get_untracked(), None);
        });
    }

    #[test]
    fn test_each_rerender_counts() {
        let owner = Owner::new();
        owner.with(|| {
            let sink = TransitionSink::new();
            sink.apply(&dispatch(&two_lines(), &CartEvent::RemoveRequested("a".into())));
            sink.apply(&dispatch(&two_lines(), &CartEvent::ClearRequested));
            assert_eq!(sink.reload.get_untracked(), 2);
        });
    }

    #[test]
    fn test_add_item_sets_navigation_only() {
        let owner = Owner::new();
        owner.with(|| {
            let sink = TransitionSink::new();
            sink.apply(&dispatch(&two_lines(), &CartEvent::AddItemRequested));
            assert_eq!(sink.navigate_to.get_untracked(), Some(Page::NewQuote));
            assert_eq!(sink.reload.get_untracked(), 0);
        });
    }
}
