use super::view_model::ObligationDetailsViewModel;
use crate::domain::a001_obligation::ui::due_date_grid::DueDateGrid;
use crate::shared::icons::icon;
use crate::system::notifications::store::NotificationStore;
use leptos::prelude::*;

#[component]
pub fn ObligationDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let notifications =
        use_context::<NotificationStore>().expect("NotificationStore not found in context");
    let vm = ObligationDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container obligation-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Modificar Obligación" } else { "Crear Nueva Obligación" }}
                </h3>
            </div>

            <Show when=move || vm.loading.get()>
                <p>"Cargando..."</p>
            </Show>

            {move || vm.error.get().map(|e| view! {
                <div class="banner banner--error">
                    <span>{e}</span>
                    <button class="banner__close" title="Cerrar" on:click=move |_| vm.error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}
            {move || vm.success.get().map(|msg| view! {
                <div class="banner banner--success">
                    <span>{msg}</span>
                    <button class="banner__close" title="Cerrar" on:click=move |_| vm.success.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="obligation-nombre">"Nombre"</label>
                    <input
                        type="text"
                        id="obligation-nombre"
                        class:input--invalid=move || vm.name_error.get().is_some()
                        prop:value=move || vm.form.with(|f| f.nombre.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| f.nombre = event_target_value(&ev));
                            vm.name_error.set(None);
                        }
                        placeholder="Ej.: IVA Mensual"
                    />
                    {move || vm.name_error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
                </div>

                <div class="form-group">
                    <label for="obligation-descripcion">"Descripción"</label>
                    <textarea
                        id="obligation-descripcion"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.descripcion.clone())
                        on:input=move |ev| vm.form.update(|f| f.descripcion = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="obligation-observaciones">"Observaciones"</label>
                    <textarea
                        id="obligation-observaciones"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.observaciones.clone())
                        on:input=move |ev| vm.form.update(|f| f.observaciones = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Vencimientos (día del mes por terminación de CUIT)"</label>
                    <DueDateGrid matrix=vm.matrix />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.saving.get() || vm.loading.get()
                    on:click=move |_| vm.save_command(on_saved, notifications)
                >
                    {icon("save")}
                    {move || if vm.saving.get() {
                        "Guardando..."
                    } else if vm.is_edit_mode() {
                        "Guardar Cambios"
                    } else {
                        "Crear Obligación"
                    }}
                </button>
                {on_cancel.map(|cancel| view! {
                    <button class="btn btn-secondary" on:click=move |_| cancel.run(())>
                        {icon("cancel")}
                        "Cancelar"
                    </button>
                })}
            </div>
        </div>
    }
}
