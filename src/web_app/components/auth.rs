// web_app/components/auth.rs - Login sidebar and login gate
//
// The sidebar signs the session in and out. RequireLogin wraps a page body
// and only builds it once the session is signed in, so nothing inside it
// (including its resources) runs for anonymous visitors.

use leptos::prelude::*;

use super::common::{Button, ErrorDisplay, Loading, Notice, NoticeKind, SecondaryButton, TextInput};
use crate::web_app::server_fns::{current_user, LogIn, LogOut};

/// Bumped after every log in / log out so auth-dependent views refetch
#[derive(Clone, Copy)]
pub struct AuthRefresh(pub RwSignal<u32>);

impl AuthRefresh {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn bump(&self) {
        self.0.update(|n| *n += 1);
    }
}

impl Default for AuthRefresh {
    fn default() -> Self {
        Self::new()
    }
}

/// The app-wide refresh signal, or a detached one outside the app
pub fn use_auth_refresh() -> AuthRefresh {
    use_context::<AuthRefresh>().unwrap_or_default()
}

/// Sidebar with the login form or the signed-in user
#[component]
pub fn AuthSidebar() -> impl IntoView {
    let refresh = use_auth_refresh();
    let auth = Resource::new(move || refresh.0.get(), |_| current_user());
    let email = RwSignal::new(String::new());

    let login = ServerAction::<LogIn>::new();
    let logout = ServerAction::<LogOut>::new();

    Effect::new(move || {
        if let Some(Ok(_)) = login.value().get() {
            email.set(String::new());
            refresh.bump();
        }
    });

    Effect::new(move || {
        if let Some(Ok(_)) = logout.value().get() {
            refresh.bump();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        login.dispatch(LogIn { email: email.get_untracked() });
    };

    view! {
        <aside class="w-full lg:w-72 flex-shrink-0 bg-white rounded-2xl shadow-sm border border-gray-100 p-6 space-y-4">
            <h2 class="text-xs font-semibold text-gray-500 uppercase tracking-wider">"Login"</h2>
            <Suspense fallback=move || view! { <Loading message="Checking session..." /> }>
                {move || auth.get().map(|result| match result {
                    Ok(state) if state.is_logged_in() => view! {
                        <div class="space-y-3">
                            <Notice
                                message=format!("Logged in as {}", state.email.unwrap_or_default())
                                kind=NoticeKind::Success
                            />
                            <SecondaryButton on_click=Callback::new(move |()| { logout.dispatch(LogOut {}); })>
                                "Log out"
                            </SecondaryButton>
                        </div>
                    }.into_any(),
                    Ok(_) => view! {
                        <form on:submit=on_submit class="space-y-3">
                            <TextInput value=email input_type="email" placeholder="you@company.com" />
                            <Button button_type="submit" class="w-full">"Log in"</Button>
                        </form>
                    }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
                })}
            </Suspense>
            {move || match login.value().get() {
                Some(Err(e)) => Some(view! { <ErrorDisplay error=e.to_string() /> }),
                _ => None,
            }}
        </aside>
    }
}

/// Render `children` only for a signed-in session
///
/// Anonymous sessions see `message` instead.
#[component]
pub fn RequireLogin(
    /// Prompt shown to anonymous sessions
    message: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let refresh = use_auth_refresh();
    let auth = Resource::new(move || refresh.0.get(), |_| current_user());

    view! {
        <Suspense fallback=move || view! { <Loading message="Checking session..." /> }>
            {move || auth.get().map(|result| match result {
                Ok(state) if state.is_logged_in() => children().into_any(),
                Ok(_) => view! { <Notice message=message.to_string() /> }.into_any(),
                Err(e) => view! { <ErrorDisplay error=e.to_string() /> }.into_any(),
            })}
        </Suspense>
    }
}
