use leptos::prelude::*;
use quote_cart::fixtures::{carts::TwoPlateCart, CartFixture};
use quote_cart::web_app::components::cart::*;
use quote_cart::web_app::view_model::*;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    // Signals and callbacks live in the current owner's arena
    let owner = Owner::new();
    owner.with(f);
}

fn two_plate_lines() -> (String, Vec<LineView>) {
    match CartView::from_cart(&TwoPlateCart::cart()) {
        CartView::Items { count_label, lines } => (count_label, lines),
        CartView::Empty { .. } => panic!("fixture cart should not be empty"),
    }
}

#[test]
fn test_cart_toolbar_instantiation() {
    with_runtime(|| {
        let _ = CartToolbar(CartToolbarProps {
            on_add: Callback::new(|()| {}),
            on_clear: Callback::new(|()| {}),
        });
    });
}

#[test]
fn test_empty_cart_renders_message() {
    with_runtime(|| {
        let html = view! { <EmptyCart message=EMPTY_CART_MESSAGE hint=EMPTY_CART_HINT /> }.to_html();
        assert!(html.contains("Your Quote Cart is empty."));
    });
}

#[test]
fn test_quantity_input_instantiation() {
    with_runtime(|| {
        let _ = QuantityInput(QuantityInputProps {
            line_id: "a".to_string(),
            quantity: 2,
            on_change: Callback::new(|(_line_id, _quantity): (String, i64)| {}),
        });
    });
}

#[test]
fn test_line_item_card_renders_heading() {
    with_runtime(|| {
        let (_, lines) = two_plate_lines();
        let line = lines[0].clone();

        let html = view! {
            <LineItemCard
                line=line
                on_quantity=Callback::new(|(_id, _qty): (String, i64)| {})
                on_remove=Callback::new(|_id: String| {})
            />
        }
        .to_html();

        assert!(html.contains("1. Steel | 0.25 in | Paddle 4 in | Bore 1 in"));
        assert!(html.contains("Label: No label"));
        assert!(html.contains("Show configuration JSON"));
    });
}

#[test]
fn test_line_item_list_instantiation() {
    with_runtime(|| {
        let (count_label, lines) = two_plate_lines();
        let _ = LineItemList(LineItemListProps {
            count_label,
            lines,
            on_quantity: Callback::new(|(_id, _qty): (String, i64)| {}),
            on_remove: Callback::new(|_id: String| {}),
        });
    });
}

#[test]
fn test_next_actions_render_placeholders() {
    with_runtime(|| {
        let html = view! { <NextActions /> }.to_html();
        assert!(html.contains(PDF_ACTION_LABEL));
        assert!(html.contains(CHECKOUT_ACTION_LABEL));
        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains(PDF_ACTION_CAPTION));
    });
}

#[test]
fn test_cart_footer_instantiation() {
    with_runtime(|| {
        let _ = CartFooter();
    });
}
