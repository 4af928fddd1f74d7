use crate::domain::a001_obligation::api;
use contracts::domain::a001_obligation::due_date_matrix::{
    digit_header, format_cell, DIGITS, MONTHS, MONTH_LONG,
};
use contracts::domain::a001_obligation::DueDateMatrix;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Read-only due-date table with long month names.
#[component]
pub fn DueDateViewer(matrix: DueDateMatrix) -> impl IntoView {
    view! {
        <div class="due-date-viewer">
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Mes"</th>
                        {(0..DIGITS as u32).map(|d| view! {
                            <th class="table__header-cell">{digit_header(d)}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {(1..=MONTHS as u32).map(|month| view! {
                        <tr class="table__row">
                            <td class="table__cell">{MONTH_LONG[month as usize - 1]}</td>
                            {(0..DIGITS as u32).map(|digit| view! {
                                <td class="table__cell">{format_cell(matrix.get(month, digit))}</td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Fetches an obligation's due dates and shows them read-only.
#[component]
pub fn ObligationDueDates(obligation_id: i64) -> impl IntoView {
    let (matrix, set_matrix) = signal::<Option<DueDateMatrix>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_due_date_matrix(obligation_id).await {
            Ok(m) => set_matrix.set(Some(m)),
            Err(e) => {
                log::error!("loading due dates of {}: {e}", obligation_id);
                set_error.set(Some("Error al cargar los vencimientos.".to_string()));
            }
        }
    });

    view! {
        {move || match (matrix.get(), error.get()) {
            (_, Some(e)) => view! { <div class="warning-box">{e}</div> }.into_any(),
            (Some(m), None) => view! { <DueDateViewer matrix=m /> }.into_any(),
            (None, None) => view! { <p>"Cargando vencimientos..."</p> }.into_any(),
        }}
    }
}
