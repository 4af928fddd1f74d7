use crate::domain::a001_obligation::api as obligation_api;
use crate::domain::a002_client::api as client_api;
use crate::domain::a002_client::ui::ClientPicker;
use crate::domain::a003_assignment::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::system::notifications::store::NotificationStore;
use contracts::domain::a001_obligation::Obligation;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_assignment::ObligationSelection;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ASSIGNED: &str = "Obligaciones asignadas correctamente.";
const ASSIGN_FAILED: &str = "Error al asignar las obligaciones.";

/// Obligation checklist for one client.
///
/// The checked set is seeded from the client's current assignments and sent
/// back whole, so unchecking an obligation removes it.
#[component]
pub fn AssignObligations() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notifications =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");

    let (client, set_client) = signal::<Option<Client>>(None);
    let (obligations, set_obligations) = signal::<Vec<Obligation>>(Vec::new());
    let selection = RwSignal::new(ObligationSelection::default());
    let (filter, set_filter) = signal(String::new());
    let (observation, set_observation) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (loading_assignments, set_loading_assignments) = signal(false);

    spawn_local(async move {
        match obligation_api::fetch_obligations().await {
            Ok(v) => set_obligations.set(v),
            Err(e) => {
                log::error!("loading obligations: {e}");
                set_error.set(Some("Error al cargar las obligaciones.".to_string()));
            }
        }
    });

    let load_assignments = move |client_id: i64| {
        set_loading_assignments.set(true);
        spawn_local(async move {
            let result = client_api::fetch_client_assignments(client_id).await;
            // a later pick owns the checklist now
            if client.get_untracked().map(|c| c.id) != Some(client_id) {
                return;
            }
            match result {
                Ok(assignments) => {
                    selection.set(ObligationSelection::from_assignments(client_id, &assignments));
                }
                Err(e) => {
                    log::error!("loading assignments of client {}: {e}", client_id);
                    selection.set(ObligationSelection::default());
                    set_error.set(Some(
                        "Error al cargar las obligaciones asignadas del cliente.".to_string(),
                    ));
                }
            }
            set_loading_assignments.set(false);
        });
    };

    let pick_client = move |_| {
        let current = client.get_untracked().map(|c| c.id);
        modal_stack.push_with_frame(
            ModalOptions::default().with_class("picker-modal"),
            move |handle| {
                view! {
                    <ClientPicker
                        initial_selected_id=current
                        on_confirm=Callback::new(move |picked: Option<Client>| {
                            if let Some(c) = picked {
                                let id = c.id;
                                set_error.set(None);
                                set_success.set(None);
                                selection.set(ObligationSelection::default());
                                set_client.set(Some(c));
                                load_assignments(id);
                            }
                            handle.close();
                        })
                        on_cancel=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let submit = move |_| {
        let Some(c) = client.get_untracked() else {
            set_error.set(Some("Debe seleccionar un cliente.".to_string()));
            return;
        };
        let Some(request) =
            selection.with_untracked(|s| s.request_for(c.id, &observation.get_untracked()))
        else {
            return;
        };
        set_error.set(None);
        set_success.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::assign_obligations(&request).await {
                Ok(()) => {
                    set_success.set(Some(ASSIGNED.to_string()));
                    set_observation.set(String::new());
                    load_assignments(c.id);
                    notifications.fetch();
                }
                Err(e) => {
                    log::error!("assigning obligations to client {}: {e}", c.id);
                    set_error.set(Some(ASSIGN_FAILED.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    let visible = move || obligations.with(|all| filter_list(all, &filter.get()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Asignar Obligaciones"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="banner banner--error">
                    <span>{e}</span>
                    <button class="banner__close" on:click=move |_| set_error.set(None)>{icon("x")}</button>
                </div>
            })}
            {move || success.get().map(|msg| view! {
                <div class="banner banner--success">
                    <span>{msg}</span>
                    <button class="banner__close" on:click=move |_| set_success.set(None)>{icon("x")}</button>
                </div>
            })}

            <div class="form-group">
                <label>"Cliente"</label>
                <div class="picker-field">
                    <span class="picker-field__value">
                        {move || client.get()
                            .map(|c| format!("{} ({})", c.display_name(), c.cuit))
                            .unwrap_or_else(|| "Ningún cliente seleccionado".to_string())}
                    </span>
                    <button class="button button--secondary" on:click=pick_client>
                        {icon("search")}
                        "Seleccionar Cliente"
                    </button>
                </div>
            </div>

            <div class="form-group">
                <label>"Obligaciones"</label>
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |v: String| set_filter.set(v))
                    placeholder="Filtrar obligaciones..."
                />
                <div class="checklist">
                    {move || visible().into_iter().map(|o| {
                        let id = o.id;
                        view! {
                            <label class="checklist__item">
                                <input
                                    type="checkbox"
                                    disabled=move || {
                                        loading_assignments.get() || client.with(|c| c.is_none())
                                    }
                                    prop:checked=move || selection.with(|s| s.is_selected(id))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selection.update(|s| s.set(id, checked));
                                    }
                                />
                                <span>{o.nombre}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
                <p class="form-group__hint">
                    {move || format!("{} seleccionadas", selection.with(|s| s.len()))}
                </p>
            </div>

            <div class="form-group">
                <label for="assign-observacion">"Observación"</label>
                <textarea
                    id="assign-observacion"
                    rows="2"
                    prop:value=observation
                    on:input=move |ev| set_observation.set(event_target_value(&ev))
                />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || {
                        saving.get()
                            || loading_assignments.get()
                            || !client.with(|c| {
                                c.as_ref()
                                    .is_some_and(|c| selection.with(|s| s.is_loaded_for(c.id)))
                            })
                    }
                    on:click=submit
                >
                    {icon("save")}
                    {move || if saving.get() { "Guardando..." } else { "Asignar Obligaciones" }}
                </button>
            </div>
        </div>
    }
}
