use crate::domain::a001_obligation::api;
use crate::domain::a001_obligation::ui::due_date_viewer::ObligationDueDates;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::obligation_detail_key;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable, SearchInput};
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::toast::use_toasts;
use crate::usecases::u501_import_obligations::ImportObligations;
use contracts::domain::a001_obligation::Obligation;
use contracts::shared::text_filter::contains_ci;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

const TAB_KEY: &str = "a001_obligation";

impl Searchable for Obligation {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.nombre, filter)
    }
}

#[component]
pub fn ObligationList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_toasts();

    let (items, set_items) = signal::<Vec<Obligation>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (filter, set_filter) = signal(String::new());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_obligations().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("loading obligations: {e}");
                    set_error.set(Some("Error al cargar las obligaciones.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Reload whenever the tab comes back to the front (after an edit tab closes).
    Effect::new(move |was_active: Option<bool>| {
        let active = tabs_store.is_active(TAB_KEY);
        if active && was_active == Some(false) {
            fetch();
        }
        active
    });

    let open_new = move |_| {
        tabs_store.open_tab("a001_obligation_new", tab_label_for_key("a001_obligation_new"));
    };

    let open_edit = move |o: &Obligation| {
        tabs_store.open_tab(
            &obligation_detail_key(o.id),
            &detail_tab_label("Obligación", &o.nombre),
        );
    };

    let open_due_dates = move |o: &Obligation| {
        let id = o.id;
        modal_stack.push_with_frame(
            ModalOptions::titled(format!("Vencimientos: {}", o.nombre))
                .with_class("due-date-viewer-modal"),
            move |_handle| view! { <ObligationDueDates obligation_id=id /> }.into_any(),
        );
    };

    let delete_one = move |o: &Obligation| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "¿Eliminar la obligación \"{}\"?",
                    o.nombre
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = o.id;
        spawn_local(async move {
            match api::delete_obligation(id).await {
                Ok(()) => {
                    toasts.success("Obligación eliminada.");
                    fetch();
                }
                Err(e) => {
                    log::error!("deleting obligation {}: {e}", id);
                    toasts.error(format!(
                        "Error al eliminar la obligación: {}",
                        e.message_or(&e.to_string())
                    ));
                }
            }
        });
    };

    fetch();

    let visible = move || items.with(|all| filter_list(all, &filter.get()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Obligaciones"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=open_new>
                        {icon("plus")}
                        " Nueva Obligación"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                    <ImportObligations on_uploaded=Callback::new(move |_| fetch()) />
                </div>
            </div>

            <SearchInput
                value=filter
                on_change=Callback::new(move |v: String| set_filter.set(v))
                placeholder="Buscar por nombre..."
            />

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Descripción"</th>
                            <th class="table__header-cell">"Observaciones"</th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible();
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr><td class="table__cell" colspan="4">"No hay obligaciones."</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|o| {
                                let for_edit = o.clone();
                                let for_dates = o.clone();
                                let for_delete = o.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{o.nombre.clone()}</td>
                                        <td class="table__cell">{o.descripcion.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{o.observaciones.clone().unwrap_or_default()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open_due_dates(&for_dates)>
                                                {icon("calendar")}
                                                " Vencimientos"
                                            </Button>
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open_edit(&for_edit)>
                                                {icon("edit")}
                                            </Button>
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_one(&for_delete)>
                                                {icon("delete")}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
