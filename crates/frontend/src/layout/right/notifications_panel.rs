//! Compact list of upcoming due dates shown in the right panel.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::date_utils::format_dmy;
use crate::shared::icons::icon;
use crate::system::notifications::store::NotificationStore;
use contracts::system::notifications::UpcomingDueDate;
use leptos::prelude::*;

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let open_all = move |_| {
        ctx.open_tab("sys_upcoming", tab_label_for_key("sys_upcoming"));
    };

    view! {
        <div class="notifications-panel">
            <div class="notifications-panel__header">
                <h3>"Notificaciones"</h3>
                <span class="notifications-panel__count">{move || format!("({})", store.count())}</span>
                <button
                    class="notifications-panel__refresh"
                    title="Actualizar"
                    disabled=move || store.is_loading()
                    on:click=move |_| store.fetch()
                >
                    {icon("refresh")}
                </button>
            </div>

            {move || store.error().map(|e| view! { <div class="warning-box">{e}</div> })}

            <div class="notifications-panel__items">
                {move || {
                    let items = store.feed.with(|f| f.items.clone());
                    if items.is_empty() {
                        view! {
                            <div class="notifications-panel__empty">"Sin vencimientos próximos."</div>
                        }.into_any()
                    } else {
                        items.into_iter().map(|item| view! { <NotificationItem item=item /> }).collect_view().into_any()
                    }
                }}
            </div>

            <button class="button button--secondary notifications-panel__all" on:click=open_all>
                "Ver todas las notificaciones"
            </button>
        </div>
    }
}

#[component]
fn NotificationItem(item: UpcomingDueDate) -> impl IntoView {
    view! {
        <div class="notifications-panel__item">
            <div class="notifications-panel__title">
                {format!("Obligación: {}", item.obligation_name())}
            </div>
            <div>{format!("Vence el: {}", format_dmy(item.vencimiento.fecha_vencimiento))}</div>
            <div>{format!("CUIT: {}", item.cuit_digit_label())}</div>
        </div>
    }
}
