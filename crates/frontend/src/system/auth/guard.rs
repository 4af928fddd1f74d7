use leptos::prelude::*;
use web_sys::window;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

pub const LOGIN_PATH: &str = "/login";

/// Replaces the current history entry, so "back" never returns to it.
pub fn replace_url(path: &str) {
    let current = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if current == path {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

/// Component that requires authentication.
///
/// Shows a placeholder while the stored session is being checked, then either
/// the children or the login page (with the URL replaced by `/login`).
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let children = StoredValue::new(children);

    Effect::new(move |_| {
        let state = auth_state.get();
        if !state.checking && !state.is_authenticated() {
            replace_url(LOGIN_PATH);
        }
    });

    view! {
        <Show
            when=move || !auth_state.get().checking
            fallback=|| view! { <div class="auth-loading">"Cargando autenticación..."</div> }
        >
            <Show
                when=move || auth_state.get().is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                {move || children.with_value(|c| c())}
            </Show>
        </Show>
    }
}
