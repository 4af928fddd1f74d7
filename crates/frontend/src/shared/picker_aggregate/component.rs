use super::traits::TableDisplayable;
use crate::shared::list_utils::{filter_list, Searchable, SearchInput};
use leptos::html::Tr;
use leptos::prelude::*;

/// Picks one item from a searchable table
///
/// - initial_selected_id preselects and scrolls to a row
/// - click selects, double click confirms
#[component]
pub fn GenericAggregatePicker<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(optional, into)] loading: Option<Signal<bool>>,
    #[prop(optional)] initial_selected_id: Option<String>,
    on_confirm: Callback<Option<T>>,
    on_cancel: Callback<()>,
    #[prop(optional)] title: Option<String>,
    /// Header of the `code()` column
    #[prop(optional)]
    code_header: Option<String>,
    /// Header of the `description()` column
    #[prop(optional)]
    description_header: Option<String>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: TableDisplayable + Searchable + Clone + Send + Sync + 'static,
{
    let (selected_id, set_selected_id) =
        signal::<Option<String>>(initial_selected_id.filter(|id| !id.is_empty()));
    let (filter, set_filter) = signal(String::new());
    let title = title.unwrap_or_else(|| "Seleccionar".to_string());
    let code_header = code_header.unwrap_or_else(|| "Código".to_string());
    let description_header = description_header.unwrap_or_else(|| "Nombre".to_string());

    let loading = loading.unwrap_or_else(|| Signal::derive(|| false));
    let error = error.unwrap_or_else(|| Signal::derive(|| None));

    let visible = move || items.with(|all| filter_list(all, &filter.get()));

    let selected_row_ref = NodeRef::<Tr>::new();
    Effect::new(move |_| {
        if selected_id.get().is_some() && !loading.get() {
            if let Some(element) = selected_row_ref.get() {
                element.scroll_into_view_with_bool(true);
            }
        }
    });

    let find_selected = move || {
        let id = selected_id.get_untracked()?;
        items.with_untracked(|all| all.iter().find(|i| i.id() == id).cloned())
    };

    view! {
        <div class="picker-container">
            <div class="picker-header">
                <h3>{title}</h3>
            </div>

            <SearchInput
                value=filter
                on_change=Callback::new(move |v: String| set_filter.set(v))
                placeholder=search_placeholder
            />

            <div class="picker-content">
                {move || {
                    if loading.get() {
                        return view! { <div class="picker-loading">"Cargando..."</div> }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <div class="picker-error"><p>{err}</p></div> }.into_any();
                    }
                    let rows = visible();
                    if rows.is_empty() {
                        return view! { <div class="picker-empty">"No hay resultados."</div> }.into_any();
                    }
                    let code_header = code_header.clone();
                    let description_header = description_header.clone();
                    view! {
                        <table class="picker-table">
                            <thead>
                                <tr>
                                    <th>{description_header}</th>
                                    <th>{code_header}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|item| {
                                    let item_id = item.id();
                                    let id_for_class = item_id.clone();
                                    let id_for_ref = item_id.clone();
                                    let is_initial = selected_id.get_untracked().as_deref() == Some(id_for_ref.as_str());
                                    let node_ref = if is_initial { selected_row_ref } else { NodeRef::new() };
                                    let for_dblclick = item.clone();
                                    view! {
                                        <tr
                                            node_ref=node_ref
                                            class="picker-row"
                                            class:selected=move || selected_id.get().as_deref() == Some(id_for_class.as_str())
                                            on:click=move |_| set_selected_id.set(Some(item_id.clone()))
                                            on:dblclick=move |_| on_confirm.run(Some(for_dblclick.clone()))
                                        >
                                            <td>{item.description()}</td>
                                            <td>{item.code()}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </div>

            <div class="picker-actions">
                <button
                    class="button button--primary"
                    disabled=move || selected_id.get().is_none()
                    on:click=move |_| on_confirm.run(find_selected())
                >
                    "Seleccionar"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
