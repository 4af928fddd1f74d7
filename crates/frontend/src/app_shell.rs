//! Application shell: root components of the app.
//!
//! - `AppShell` - auth gate (login page or the main layout)
//! - `MainLayout` - Shell + Sidebar + Tabs + notifications panel

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::right::NotificationsPanel;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::notifications::store::NotificationStore;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout.
///
/// Syncs tabs with the URL (`?active=...`) and keeps the notification poller
/// running for as long as it is mounted.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    tabs_store.init_router_integration();

    notifications.start_polling();
    on_cleanup(move || notifications.stop_polling());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                        <div class="page home">
                            <h1 class="header__title">"Panel Principal"</h1>
                            <p>"Seleccioná una opción del menú para comenzar."</p>
                        </div>
                    </Show>
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("tab mounted: '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
            right=|| view! { <NotificationsPanel /> }.into_any()
        />
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
