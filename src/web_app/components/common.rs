// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Displays error messages with appropriate styling.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Error Occurred"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Tone of a [`Notice`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Warning,
    Success,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "bg-blue-50 border border-blue-200 text-blue-800 rounded-xl px-4 py-3",
            NoticeKind::Warning => "bg-yellow-50 border border-yellow-200 text-yellow-800 rounded-xl px-4 py-3",
            NoticeKind::Success => "bg-green-50 border border-green-200 text-green-800 rounded-xl px-4 py-3",
        }
    }
}

/// Single-line informational box
#[component]
pub fn Notice(
    /// Text to show
    message: String,
    #[prop(default = NoticeKind::Info)]
    kind: NoticeKind,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="status">
            {message}
        </div>
    }
}

/// Small grey text under a control
#[component]
pub fn Caption(children: Children) -> impl IntoView {
    view! {
        <p class="text-xs text-gray-500 mt-1">{children()}</p>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 disabled:cursor-not-allowed font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Collapsible panel, closed by default
#[component]
pub fn Expander(
    /// Text on the toggle
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <details class="mt-3 border border-gray-100 rounded-lg bg-gray-50/50">
            <summary class="cursor-pointer select-none px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900">
                {title}
            </summary>
            <div class="px-4 pb-4">
                {children()}
            </div>
        </details>
    }
}

/// Read-only, monospaced block for structured data
#[component]
pub fn JsonBlock(
    /// Pre-formatted JSON text
    json: String,
) -> impl IntoView {
    view! {
        <pre class="text-xs font-mono bg-white border border-gray-200 rounded-lg p-3 overflow-x-auto">
            {json}
        </pre>
    }
}

/// Text input component
///
/// A styled text input with optional placeholder.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Checkbox component
///
/// A styled checkbox with label.
#[component]
pub fn Checkbox(
    /// Whether the checkbox is checked
    checked: RwSignal<bool>,
    /// Label text
    label: String,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 cursor-pointer group">
            <input
                type="checkbox"
                class="rounded border-gray-300 text-blue-600 focus:ring-blue-500 h-4 w-4"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="text-gray-700 group-hover:text-gray-900 transition-colors">{label}</span>
        </label>
    }
}

/// Select dropdown component
///
/// A styled select dropdown for string values.
#[component]
pub fn SelectString(
    /// The currently selected value
    value: RwSignal<String>,
    /// Available options as (value, label) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    let class = "px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select
            class=class
            on:change=move |ev| {
                value.set(event_target_value(&ev));
            }
        >
            {options.into_iter().map(|(opt_value, label)| {
                let opt_val = opt_value.clone();
                view! {
                    <option
                        value=opt_value
                        selected=move || value.get() == opt_val
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_default_kind() {
        assert_eq!(NoticeKind::default(), NoticeKind::Info);
    }

    #[test]
    fn test_notice_classes() {
        assert!(NoticeKind::Info.class().contains("bg-blue-50"));
        assert!(NoticeKind::Warning.class().contains("bg-yellow-50"));
        assert!(NoticeKind::Success.class().contains("bg-green-50"));

        for kind in [NoticeKind::Info, NoticeKind::Warning, NoticeKind::Success] {
            assert!(kind.class().contains("rounded-xl"), "Rounded for {:?}", kind);
        }
    }

    #[test]
    fn test_button_renders_type_and_classes() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <Button button_type="submit" disabled=true class="w-full">"Log in"</Button>
            }
            .to_html();

            assert!(html.contains(r#"type="submit""#));
            assert!(html.contains("bg-blue-600"));
            assert!(html.contains("w-full"));
            assert!(html.contains("Log in"));
        });
    }
}
