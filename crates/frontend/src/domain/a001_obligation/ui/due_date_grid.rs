use contracts::domain::a001_obligation::due_date_matrix::{DIGITS, MONTHS, MONTH_SHORT};
use contracts::domain::a001_obligation::DueDateMatrix;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Editable 12 × 10 grid: months by CUIT ending digit.
///
/// Each keystroke is normalised by `parse_day_input` and written back to the
/// input, so the cell always shows what will be saved.
#[component]
pub fn DueDateGrid(matrix: RwSignal<DueDateMatrix>) -> impl IntoView {
    view! {
        <div class="due-date-grid">
            <table class="table__data due-date-grid__table">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Mes"</th>
                        {(0..DIGITS as u32).map(|d| view! {
                            <th class="table__header-cell">{d.to_string()}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {(1..=MONTHS as u32).map(|month| view! {
                        <tr class="table__row">
                            <td class="table__cell due-date-grid__month">
                                {MONTH_SHORT[month as usize - 1]}
                            </td>
                            {(0..DIGITS as u32).map(|digit| view! {
                                <td class="table__cell">
                                    <DayCell matrix=matrix month=month digit=digit />
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn DayCell(matrix: RwSignal<DueDateMatrix>, month: u32, digit: u32) -> impl IntoView {
    let value = move || {
        matrix
            .with(|m| m.get(month, digit))
            .map(|d| d.to_string())
            .unwrap_or_default()
    };

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        matrix.update(|m| {
            m.set_from_input(month, digit, &raw);
        });
        // the signal may not change (e.g. "abc" on an empty cell)
        let normalised = value();
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            if input.value() != normalised {
                input.set_value(&normalised);
            }
        }
    };

    view! {
        <input
            type="text"
            inputmode="numeric"
            class="due-date-grid__input"
            maxlength="3"
            prop:value=value
            on:input=on_input
        />
    }
}
