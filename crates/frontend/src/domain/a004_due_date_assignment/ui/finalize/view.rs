use super::view_model::FinalizeViewModel;
use crate::shared::icons::icon;
use leptos::html::Input;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Contact, observation and attachments for finalizing one due date.
#[component]
pub fn FinalizeModal(
    instance_id: i64,
    client_id: Option<i64>,
    busy: RwSignal<bool>,
    on_committed: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = FinalizeViewModel::new(instance_id, busy);
    vm.load_contacts(client_id);

    let file_input = NodeRef::<Input>::new();
    let on_files = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        if let Some(files) = input.files() {
            vm.add_files(files);
        }
        // same file can be picked again after removing it
        input.set_value("");
    };

    view! {
        <div class="finalize-form">
            {move || vm.error.get().map(|e| view! {
                <div class="banner banner--error">
                    <span>{e}</span>
                </div>
            })}

            <div class="form-group">
                <label for="finalize-contacto">"Contacto destinatario"</label>
                <select
                    id="finalize-contacto"
                    disabled=move || vm.loading.get() || vm.committed.get()
                    on:change=move |ev| vm.select_contact(&event_target_value(&ev))
                >
                    <option value="" selected=move || vm.form.with(|f| f.contact_id.is_none())>
                        {move || if vm.loading.get() { "Cargando contactos..." } else { "Seleccione un contacto" }}
                    </option>
                    {move || vm.contacts.get().into_iter().map(|c| {
                        let id = c.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || vm.form.with(|f| f.contact_id == Some(id))
                            >
                                {c.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="finalize-observacion">"Observación"</label>
                <textarea
                    id="finalize-observacion"
                    rows="3"
                    disabled=move || vm.committed.get()
                    prop:value=move || vm.form.with(|f| f.observation.clone())
                    on:input=move |ev| vm.form.update(|f| f.observation = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="finalize-adjuntos">"Archivos adjuntos"</label>
                <input
                    type="file"
                    id="finalize-adjuntos"
                    multiple=true
                    node_ref=file_input
                    on:change=on_files
                />
                <ul class="attachment-list">
                    {move || vm.attachments.with(|set| {
                        set.keys().map(|k| k.label()).collect::<Vec<_>>()
                    })
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| view! {
                        <li class="attachment-list__item">
                            <span>{label}</span>
                            <button
                                class="button button--ghost"
                                title="Quitar"
                                disabled=move || vm.busy.get()
                                on:click=move |_| vm.remove_attachment(index)
                            >
                                {icon("x")}
                            </button>
                        </li>
                    })
                    .collect_view()}
                </ul>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.busy.get() || vm.loading.get())
                    loading=Signal::derive(move || vm.busy.get())
                    on_click=move |_| vm.submit(on_committed, on_close)
                >
                    {move || if vm.committed.get() { "Reintentar notificación" } else { "Finalizar y notificar" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.busy.get())
                    on_click=move |_| on_close.run(())
                >
                    {move || if vm.committed.get() { "Cerrar" } else { "Cancelar" }}
                </Button>
            </div>
        </div>
    }
}
