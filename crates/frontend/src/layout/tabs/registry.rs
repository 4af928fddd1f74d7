//! tab.key → View. Every tab key the app can open is listed here.

use super::tab_labels::{tab_label_for_key, OBLIGATION_DETAIL_PREFIX};
use crate::domain::a001_obligation::ui::details::ObligationDetails;
use crate::domain::a001_obligation::ui::list::ObligationList;
use crate::domain::a003_assignment::ui::{AssignObligations, AssignResponsible};
use crate::domain::a004_due_date_assignment::ui::list::DueDateAssignmentList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::notifications::ui::UpcomingPage;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_obligation" => view! { <ObligationList /> }.into_any(),
        "a001_obligation_new" => view! {
            // stays open for the next obligation; the form resets itself
            <ObligationDetails id=None on_saved=Callback::new(|_| ()) />
        }
        .into_any(),
        k if k.starts_with(OBLIGATION_DETAIL_PREFIX) => {
            let Some(id) = k
                .strip_prefix(OBLIGATION_DETAIL_PREFIX)
                .and_then(|id| id.parse::<i64>().ok())
            else {
                return unknown_tab(k);
            };
            let key_for_close = k.to_string();
            let key_for_cancel = k.to_string();
            view! {
                <ObligationDetails
                    id=Some(id)
                    on_saved=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                        tabs_store.open_tab("a001_obligation", tab_label_for_key("a001_obligation"));
                    })
                    on_cancel=Callback::new(move |_| tabs_store.close_tab(&key_for_cancel))
                />
            }
            .into_any()
        }
        "a003_assign_obligations" => view! { <AssignObligations /> }.into_any(),
        "a003_assign_responsible" => view! { <AssignResponsible /> }.into_any(),
        "a004_due_date_assignment" => view! { <DueDateAssignmentList /> }.into_any(),
        "sys_upcoming" => view! { <UpcomingPage /> }.into_any(),
        k => unknown_tab(k),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log!("unknown tab key: {}", key);
    view! { <div class="placeholder">"Pantalla no disponible"</div> }.into_any()
}
