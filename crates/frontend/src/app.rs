use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use crate::system::notifications::store::NotificationStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs and panel visibility
    provide_context(AppGlobalContext::new());

    // Centralized modal stack
    provide_context(ModalStackService::new());

    // Single shared "próximas a vencer" list
    provide_context(NotificationStore::new());

    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ModalHost />
        <ToastHost />
    }
}
