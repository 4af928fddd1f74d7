pub mod state;

use self::state::create_state;
use crate::domain::a004_due_date_assignment::api;
use crate::domain::a004_due_date_assignment::ui::finalize::FinalizeModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_dmy, parse_date_input, today};
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::system::auth::context::use_auth;
use crate::system::notifications::store::NotificationStore;
use contracts::domain::a004_due_date_assignment::{
    user_options, DisplayState, DueDateAssignment, StateFilter,
};
use contracts::shared::pagination::{clamp_page, needs_pagination};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Input};

fn badge_color(state: DisplayState) -> BadgeColor {
    match state {
        DisplayState::Pending => BadgeColor::Warning,
        DisplayState::Overdue => BadgeColor::Danger,
        DisplayState::Finalized => BadgeColor::Success,
    }
}

/// Every due-date instance with client-side filters and paging.
#[component]
pub fn DueDateAssignmentList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notifications =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");
    let (auth, _) = use_auth();

    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let finalizing = RwSignal::new(false);
    let client_name = RwSignal::new(String::new());
    let cuit_prefix = RwSignal::new(String::new());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_due_date_assignments().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("loading due date assignments: {e}");
                    set_error.set(Some(format!(
                        "Error al cargar las asignaciones: {}",
                        e.message_or(&e.to_string())
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    let open_finalize = move |item: &DueDateAssignment| {
        let id = item.id;
        let client_id = item.client().map(|c| c.id);
        let finalizer: Option<User> = auth.with_untracked(|a| a.user_info.as_ref().map(User::from));
        let title = format!(
            "Finalizar: {} - {}",
            item.asignacion.obligacion.nombre,
            item.client().map(|c| c.display_name()).unwrap_or_default()
        );
        modal_stack.push_with_frame(
            ModalOptions::titled(title)
                .with_class("finalize-modal")
                .with_guard(move || !finalizing.get_untracked()),
            move |handle| {
                let finalizer = finalizer.clone();
                view! {
                    <FinalizeModal
                        instance_id=id
                        client_id=client_id
                        busy=finalizing
                        on_committed=Callback::new(move |observation: String| {
                            state.update(|s| s.apply_finalized(id, today(), &observation, finalizer.clone()));
                            notifications.fetch();
                        })
                        on_close=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    // text inputs are bound to their own signals; copy them into the filter
    Effect::new(move |_| {
        let name = client_name.get();
        let cuit = cuit_prefix.get();
        state.update(|s| {
            s.update_filter(|f| {
                f.client_name = name;
                f.cuit_prefix = cuit;
            })
        });
    });

    fetch();

    // current date, read on every run
    let filtered = Memo::new(move |_| state.with(|s| s.filtered(today())));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages(filtered.with(|f| f.len()))));
    let users = Memo::new(move |_| state.with(|s| user_options(&s.items)));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Listado de Asignaciones"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="filter-panel">
                <Input value=client_name placeholder="Cliente" />
                <Input value=cuit_prefix placeholder="CUIT" />
                <input
                    type="date"
                    class="filter-panel__input"
                    on:change=move |ev| {
                        let date = parse_date_input(&event_target_value(&ev));
                        state.update(|s| s.update_filter(|f| f.due_date = date));
                    }
                />
                <select
                    class="filter-panel__input"
                    on:change=move |ev| {
                        let choice = StateFilter::from_value(&event_target_value(&ev));
                        state.update(|s| s.update_filter(|f| f.state = choice));
                    }
                >
                    <option value="">"Todos los estados"</option>
                    {StateFilter::ALL.into_iter().map(|f| view! {
                        <option value=f.value()>{f.value()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__input"
                    on:change=move |ev| {
                        let user_id = event_target_value(&ev).parse::<i64>().ok();
                        state.update(|s| s.update_filter(|f| f.user_id = user_id));
                    }
                >
                    <option value="">"Todos los responsables"</option>
                    {move || users.get().into_iter().map(|(id, label)| {
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || state.with(|s| s.filter.user_id == Some(id))
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"CUIT"</th>
                            <th class="table__header-cell">"Obligación"</th>
                            <th class="table__header-cell">"Vencimiento"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell">"Responsable"</th>
                            <th class="table__header-cell">"Finalización"</th>
                            <th class="table__header-cell">"Observación"</th>
                            <th class="table__header-cell">"Acción"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered.with(|f| state.with(|s| s.visible(f)));
                            if rows.is_empty() && state.with(|s| s.is_loaded) {
                                return view! {
                                    <tr><td class="table__cell" colspan="9">"No hay asignaciones para los filtros seleccionados."</td></tr>
                                }.into_any();
                            }
                            let day = today();
                            rows.into_iter().map(|item| {
                                let display = item.display_state(day);
                                let client = item.client();
                                let client_name = client.map(|c| c.display_name()).unwrap_or_else(|| "-".to_string());
                                let cuit = client.map(|c| c.cuit.clone()).unwrap_or_default();
                                let finalized_on = item
                                    .fecha_finalizacion
                                    .map(|d| format_dmy(Some(d)))
                                    .unwrap_or_else(|| "-".to_string());
                                let can_finalize = item.can_finalize();
                                let responsible = item.responsible_label();
                                let due = format_dmy(item.due_date());
                                let obligation = item.asignacion.obligacion.nombre.clone();
                                let observation = item.observacion.clone().unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{client_name}</td>
                                        <td class="table__cell">{cuit}</td>
                                        <td class="table__cell">{obligation}</td>
                                        <td class="table__cell">{due}</td>
                                        <td class="table__cell">
                                            <Badge appearance=BadgeAppearance::Tint color=badge_color(display)>
                                                {display.label()}
                                            </Badge>
                                        </td>
                                        <td class="table__cell">{responsible}</td>
                                        <td class="table__cell">{finalized_on}</td>
                                        <td class="table__cell">{observation}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=!can_finalize
                                                on_click=move |_| open_finalize(&item)
                                            >
                                                {icon("check")}
                                                " Finalizar"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || needs_pagination(filtered.with(|f| f.len()), state.with(|s| s.page_size))>
                <PaginationControls
                    current_page=Signal::derive(move || {
                        let total = filtered.with(|f| f.len());
                        state.with(|s| clamp_page(s.page, total, s.page_size))
                    })
                    total_pages=total_pages
                    total_count=Signal::derive(move || filtered.with(|f| f.len()))
                    on_page_change=Callback::new(move |page: usize| state.update(|s| s.page = page))
                />
            </Show>
        </div>
    }
}
