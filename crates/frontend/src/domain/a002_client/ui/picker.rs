use crate::domain::a002_client::api;
use crate::shared::list_utils::Searchable;
use crate::shared::picker_aggregate::{
    AggregatePickerResult, GenericAggregatePicker, TableDisplayable,
};
use contracts::domain::a002_client::Client;
use leptos::prelude::*;
use leptos::task::spawn_local;

impl AggregatePickerResult for Client {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> String {
        Client::display_name(self)
    }
}

impl TableDisplayable for Client {
    fn code(&self) -> String {
        self.cuit.clone()
    }

    fn description(&self) -> String {
        Client::display_name(self)
    }
}

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_search(filter)
    }
}

/// Loads `/api/clientes` and lets the user pick one (search by name or CUIT).
#[component]
pub fn ClientPicker(
    initial_selected_id: Option<i64>,
    on_confirm: Callback<Option<Client>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (items, set_items) = signal::<Vec<Client>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_clients().await {
            Ok(clients) => set_items.set(clients),
            Err(e) => {
                log::error!("loading clients: {e}");
                set_error.set(Some(e.message_or("Error al cargar los clientes.")));
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
            title="Seleccionar Cliente".to_string()
            code_header="CUIT".to_string()
            description_header="Cliente".to_string()
            search_placeholder="Buscar por nombre, razón social o CUIT..."
        />
    }
}
