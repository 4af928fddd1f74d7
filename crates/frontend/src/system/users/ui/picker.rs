use crate::shared::list_utils::Searchable;
use crate::shared::picker_aggregate::{
    AggregatePickerResult, GenericAggregatePicker, TableDisplayable,
};
use crate::system::users::api;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl AggregatePickerResult for User {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> String {
        self.label()
    }
}

impl TableDisplayable for User {
    fn code(&self) -> String {
        self.username.clone().unwrap_or_default()
    }

    fn description(&self) -> String {
        self.label()
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_search(filter)
    }
}

/// Loads `/api/usuarios` and lets the user pick one (search by nombreUsuario).
#[component]
pub fn UserPicker(
    initial_selected_id: Option<i64>,
    on_confirm: Callback<Option<User>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (items, set_items) = signal::<Vec<User>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_users().await {
            Ok(users) => set_items.set(users),
            Err(e) => {
                log::error!("loading users: {e}");
                set_error.set(Some(e.message_or("Error al cargar los usuarios.")));
            }
        }
        set_loading.set(false);
    });

    view! {
        <GenericAggregatePicker
            items=items
            error=error
            loading=loading
            initial_selected_id=initial_selected_id.map(|id| id.to_string()).unwrap_or_default()
            on_confirm=on_confirm
            on_cancel=on_cancel
            title="Seleccionar Responsable".to_string()
            code_header="Usuario".to_string()
            description_header="Nombre".to_string()
            search_placeholder="Buscar por nombre de usuario..."
        />
    }
}
