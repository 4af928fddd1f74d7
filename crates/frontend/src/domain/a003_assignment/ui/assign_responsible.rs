use crate::domain::a002_client::api as client_api;
use crate::domain::a002_client::ui::ClientPicker;
use crate::domain::a003_assignment::api;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::system::users::ui::UserPicker;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_assignment::Assignment;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Links a client to the backoffice user responsible for it.
#[component]
pub fn AssignResponsible() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let (user, set_user) = signal::<Option<User>>(None);
    let (client, set_client) = signal::<Option<Client>>(None);
    // Assignments of the last client touched; survives clearing the selection.
    let (assignments, set_assignments) = signal::<Vec<Assignment>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let load_assignments = move |client_id: i64| {
        spawn_local(async move {
            match client_api::fetch_client_assignments(client_id).await {
                Ok(v) => set_assignments.set(v),
                Err(e) => {
                    log::error!("loading assignments of client {}: {e}", client_id);
                    set_assignments.set(Vec::new());
                }
            }
        });
    };

    let pick_user = move |_| {
        let current = user.get_untracked().map(|u| u.id);
        modal_stack.push_with_frame(
            ModalOptions::default().with_class("picker-modal"),
            move |handle| {
                view! {
                    <UserPicker
                        initial_selected_id=current
                        on_confirm=Callback::new(move |picked: Option<User>| {
                            if picked.is_some() {
                                set_user.set(picked);
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
                                load_assignments(c.id);
                                set_client.set(Some(c));
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
        let (Some(u), Some(c)) = (user.get_untracked(), client.get_untracked()) else {
            set_error.set(Some("Debe seleccionar un responsable y un cliente.".to_string()));
            return;
        };
        set_error.set(None);
        set_success.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::assign_responsible(c.id, u.id).await {
                Ok(()) => {
                    set_success.set(Some(format!(
                        "Responsable {} asignado a {}.",
                        u.username.clone().unwrap_or_default(),
                        c.display_name()
                    )));
                    load_assignments(c.id);
                    set_user.set(None);
                    set_client.set(None);
                }
                Err(e) => {
                    log::error!("assigning user {} to client {}: {e}", u.id, c.id);
                    set_error.set(Some(format!("Error: {}", e.message_or(&e.to_string()))));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Asignar Responsable"</h1>
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
                <label>"Responsable"</label>
                <div class="picker-field">
                    <span class="picker-field__value">
                        {move || user.get()
                            .map(|u| u.label())
                            .unwrap_or_else(|| "Ningún usuario seleccionado".to_string())}
                    </span>
                    <button class="button button--secondary" on:click=pick_user>
                        {icon("user")}
                        "Seleccionar Responsable"
                    </button>
                </div>
            </div>

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

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || saving.get() || user.with(|u| u.is_none()) || client.with(|c| c.is_none())
                    on:click=submit
                >
                    {icon("user-check")}
                    {move || if saving.get() { "Asignando..." } else { "Asignar Responsable" }}
                </button>
            </div>

            <Show when=move || !assignments.with(|a| a.is_empty())>
                <h3>"Obligaciones del cliente"</h3>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Cliente"</th>
                                <th class="table__header-cell">"Obligación"</th>
                                <th class="table__header-cell">"Responsable"</th>
                                <th class="table__header-cell">"Observación"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || assignments.get().into_iter().map(|a| {
                                let client = a.cliente.as_ref();
                                let client_name = client.map(|c| c.display_name()).unwrap_or_else(|| "-".to_string());
                                let responsible = client
                                    .and_then(|c| c.responsible_user.as_ref())
                                    .map(|u| u.label())
                                    .unwrap_or_else(|| "No asignado".to_string());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{client_name}</td>
                                        <td class="table__cell">{a.obligacion.nombre.clone()}</td>
                                        <td class="table__cell">{responsible}</td>
                                        <td class="table__cell">{a.observacion.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
