// web_app/pages/quote.rs - New quote page
//
// Configures one plate and appends it to the session's cart, then returns
// to the cart. Validation runs in the browser first (QuoteForm::to_inputs)
// so bad input never leaves the page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::AddToQuote;
use crate::web_app::state::QuoteForm;
use crate::web_app::view_model::LOGIN_PROMPT;

const BORE_TOLERANCES: [&str; 3] = ["0.005", "0.002", "0.001"];
const SHIPS_IN_DAYS: [&str; 3] = ["7", "14", "21"];

fn options<T: ToString>(values: impl IntoIterator<Item = T>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| {
            let v = v.to_string();
            (v.clone(), v)
        })
        .collect()
}

/// Keep `current` if `material` is stocked in it, else its thinnest plate
fn stocked_thickness(material: &str, current: &str) -> String {
    let offered = thicknesses_for(material);
    match current.trim().parse::<f64>() {
        Ok(t) if offered.contains(&t) => current.to_string(),
        _ => offered.first().map(|t| t.to_string()).unwrap_or_default(),
    }
}

/// New quote page, behind the login gate
#[component]
pub fn NewQuotePage() -> impl IntoView {
    view! {
        <PageLayout title="New Quote">
            <RequireLogin message=LOGIN_PROMPT>
                <QuoteFormBody />
            </RequireLogin>
        </PageLayout>
    }
}

#[component]
fn QuoteFormBody() -> impl IntoView {
    let material = RwSignal::new(MATERIALS[0].to_string());
    let thickness = RwSignal::new(stocked_thickness(MATERIALS[0], ""));
    let handle_width = RwSignal::new("1.5".to_string());
    let handle_length_from_bore = RwSignal::new("9.0".to_string());
    let paddle_dia = RwSignal::new("3.0".to_string());
    let bore_dia = RwSignal::new("1.0".to_string());
    let handle_label = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());
    let bore_tolerance = RwSignal::new(BORE_TOLERANCES[0].to_string());
    let chamfer = RwSignal::new(true);
    let ships_in_days = RwSignal::new(SHIPS_IN_DAYS[2].to_string());

    let form_error = RwSignal::new(None::<String>);
    let add = ServerAction::<AddToQuote>::new();
    let navigate = use_navigate();

    // Switching material drops a thickness the new material is not stocked in
    Effect::new(move || {
        let next = stocked_thickness(&material.get(), &thickness.get_untracked());
        if next != thickness.get_untracked() {
            thickness.set(next);
        }
    });

    Effect::new(move || {
        if let Some(Ok(item)) = add.value().get() {
            tracing::debug!("Added line {}", item.line_id);
            navigate(Page::QuoteCart.path(), Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = QuoteForm {
            material: material.get_untracked(),
            thickness: thickness.get_untracked(),
            paddle_dia: paddle_dia.get_untracked(),
            bore_dia: bore_dia.get_untracked(),
            handle_label: handle_label.get_untracked(),
            handle_width: handle_width.get_untracked(),
            handle_length_from_bore: handle_length_from_bore.get_untracked(),
            chamfer: chamfer.get_untracked(),
            quantity: quantity.get_untracked(),
            bore_tolerance: bore_tolerance.get_untracked(),
            ships_in_days: ships_in_days.get_untracked(),
        };
        match form.to_inputs() {
            Ok(inputs) => {
                form_error.set(None);
                add.dispatch(AddToQuote { inputs });
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let field = "flex flex-col gap-1 text-sm font-medium text-gray-700";

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-5 max-w-2xl">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class=field>
                    "Qty"
                    <TextInput value=quantity input_type="number" />
                </label>
                <label class=field>
                    "Material Type"
                    <SelectString value=material options=options(MATERIALS) />
                </label>
                <label class=field>
                    "Plate Thickness (in)"
                    {move || {
                        let offered = options(thicknesses_for(&material.get()).iter());
                        view! { <SelectString value=thickness options=offered /> }
                    }}
                </label>
                <label class=field>
                    "Handle Width (in)"
                    <TextInput value=handle_width input_type="number" />
                </label>
                <label class=field>
                    "Handle Length from Bore (in)"
                    <TextInput value=handle_length_from_bore input_type="number" />
                </label>
                <label class=field>
                    "Paddle Diameter (in)"
                    <TextInput value=paddle_dia input_type="number" />
                </label>
                <label class=field>
                    "Bore Diameter (in)"
                    <TextInput value=bore_dia input_type="number" />
                </label>
                <label class=field>
                    "Bore Tolerance (± in)"
                    <SelectString value=bore_tolerance options=options(BORE_TOLERANCES) />
                </label>
                <label class=field>
                    "Ships in (days)"
                    <SelectString value=ships_in_days options=options(SHIPS_IN_DAYS) />
                </label>
                <label class=field>
                    "Handle label"
                    <TextInput value=handle_label placeholder=NO_LABEL />
                </label>
            </div>

            <Checkbox checked=chamfer label="Chamfer".to_string() />

            {move || form_error.get().map(|e| view! { <Notice message=e kind=NoticeKind::Warning /> })}
            {move || match add.value().get() {
                Some(Err(e)) => Some(view! { <ErrorDisplay error=e.to_string() /> }),
                _ => None,
            }}

            <Button button_type="submit">"Add to Quote"</Button>
        </form>
    }
}
