use crate::shared::date_utils::format_dmy;
use crate::shared::icons::icon;
use crate::system::notifications::store::NotificationStore;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

/// "Asignaciones Próximas a Vencer": every item of the shared list.
#[component]
pub fn UpcomingPage() -> impl IntoView {
    let store = use_context::<NotificationStore>().expect("NotificationStore not found in context");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Asignaciones Próximas a Vencer"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || store.is_loading())
                        loading=Signal::derive(move || store.is_loading())
                        on_click=move |_| store.fetch()
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            {move || store.error().map(|e| view! { <div class="warning-box"><span>{e}</span></div> })}

            {move || {
                let items = store.feed.with(|f| f.items.clone());
                if items.is_empty() {
                    return view! {
                        <p class="empty-state">"No hay asignaciones que venzan en los próximos 10 días."</p>
                    }.into_any();
                }
                view! {
                    <div class="upcoming-list">
                        {items.into_iter().map(|item| {
                            let client = item.client_name().unwrap_or("-").to_string();
                            view! {
                                <Card class="upcoming-card">
                                    <h3 class="upcoming-card__title">{item.obligation_name().to_string()}</h3>
                                    <p>{format!("Cliente: {}", client)}</p>
                                    <p>{format!("Vence el: {}", format_dmy(item.vencimiento.fecha_vencimiento))}</p>
                                    <p>{format!("CUIT termina en: {}", item.cuit_digit_label())}</p>
                                    <p>{format!("Estado: {}", item.estado.as_str())}</p>
                                    <p>{format!("Observación: {}", item.observacion.clone().unwrap_or_else(|| "-".to_string()))}</p>
                                </Card>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
