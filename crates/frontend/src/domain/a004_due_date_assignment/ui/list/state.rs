use contracts::domain::a004_due_date_assignment::{DueDateAssignment, DueDateFilter};
use contracts::shared::pagination::{clamp_page, page_count, page_slice};
use leptos::prelude::*;

use crate::shared::config::app_config;

#[derive(Clone, Debug)]
pub struct DueDateListState {
    pub items: Vec<DueDateAssignment>,
    pub filter: DueDateFilter,
    pub is_loaded: bool,
    /// 1-indexed
    pub page: usize,
    pub page_size: usize,
}

impl Default for DueDateListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: DueDateFilter::default(),
            is_loaded: false,
            page: 1,
            page_size: app_config().listing.page_size,
        }
    }
}

impl DueDateListState {
    /// Changes one filter field and goes back to the first page.
    pub fn update_filter(&mut self, change: impl FnOnce(&mut DueDateFilter)) {
        change(&mut self.filter);
        self.page = 1;
    }

    pub fn filtered(&self, today: chrono::NaiveDate) -> Vec<DueDateAssignment> {
        self.filter
            .apply(&self.items, today)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn total_pages(&self, filtered: usize) -> usize {
        page_count(filtered, self.page_size)
    }

    /// Rows of the current page; the page is clamped when the list shrank.
    pub fn visible(&self, filtered: &[DueDateAssignment]) -> Vec<DueDateAssignment> {
        let page = clamp_page(self.page, filtered.len(), self.page_size);
        page_slice(filtered, page, self.page_size).to_vec()
    }

    /// Local copy of a finalization the backend already accepted.
    pub fn apply_finalized(
        &mut self,
        id: i64,
        today: chrono::NaiveDate,
        observation: &str,
        by: Option<contracts::system::users::User>,
    ) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.mark_finalized(today, observation, by);
        }
    }
}

pub fn create_state() -> RwSignal<DueDateListState> {
    RwSignal::new(DueDateListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i64, cliente: &str, estado: &str) -> DueDateAssignment {
        serde_json::from_value(serde_json::json!({
            "idAsignacionVencimiento": id,
            "asignacion": {
                "idAsignacion": id,
                "cliente": { "idCliente": id, "nombre": cliente, "cuit": "20123456789" },
                "obligacion": { "id": 1, "nombre": "IVA" },
                "activo": true
            },
            "vencimiento": { "fechaVencimiento": "2025-06-20" },
            "estado": estado
        }))
        .unwrap()
    }

    fn state_with(n: i64) -> DueDateListState {
        DueDateListState {
            items: (1..=n).map(|i| item(i, &format!("Cliente {i}"), "PENDIENTE")).collect(),
            page_size: 10,
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = state_with(25);
        state.page = 3;
        state.update_filter(|f| f.client_name = "cliente 2".into());
        assert_eq!(state.page, 1);
        // "Cliente 2" and "Cliente 20".."Cliente 25"
        assert_eq!(state.filtered(today()).len(), 7);
    }

    #[test]
    fn test_visible_clamps_page() {
        let mut state = state_with(25);
        let filtered = state.filtered(today());
        assert_eq!(state.total_pages(filtered.len()), 3);

        state.page = 3;
        assert_eq!(state.visible(&filtered).len(), 5);

        state.page = 9;
        let last = state.visible(&filtered);
        assert_eq!(last.first().map(|i| i.id), Some(21));
    }

    #[test]
    fn test_overdue_filter_follows_current_date() {
        use contracts::domain::a004_due_date_assignment::StateFilter;

        let mut state = state_with(3);
        state.update_filter(|f| f.state = Some(StateFilter::Overdue));
        assert!(state.filtered(today()).is_empty());

        // due 2025-06-20; same items once the date rolls past it
        let later = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        assert_eq!(state.filtered(later).len(), 3);
    }

    #[test]
    fn test_apply_finalized_updates_row() {
        let mut state = state_with(2);
        state.apply_finalized(2, today(), "presentado", None);

        assert!(state.items[1].is_finalized());
        assert_eq!(state.items[1].fecha_finalizacion, Some(today()));
        assert_eq!(state.items[1].observacion.as_deref(), Some("presentado"));
        assert!(!state.items[0].is_finalized());
    }
}
