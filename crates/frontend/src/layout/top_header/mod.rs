//! Top bar: sidebar toggle, title, notification bell, user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::{display_name, do_logout, use_auth};
use crate::system::notifications::store::NotificationStore;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modals = use_context::<ModalStackService>().expect("ModalStackService not found");
    let notifications =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    let logout = move |_| {
        modals.clear();
        ctx.close_all();
        do_logout(set_auth_state);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Contable 360"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn top-header__bell"
                    class:top-header__icon-btn--active=is_right_panel_visible
                    on:click=move |_| ctx.toggle_right()
                    title="Notificaciones"
                >
                    {icon("bell")}
                    <Show when=move || { notifications.count() > 0 }>
                        <span class="top-header__badge">{move || notifications.count()}</span>
                    </Show>
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(display_name)}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
