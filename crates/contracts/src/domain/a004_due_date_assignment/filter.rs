use super::aggregate::DueDateAssignment;
use super::status::DisplayState;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// State filter of the list. Matches the derived display state, so
/// `Pending` excludes overdue instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    Pending,
    Overdue,
    Finalized,
}

impl StateFilter {
    pub const ALL: [StateFilter; 3] = [
        StateFilter::Pending,
        StateFilter::Overdue,
        StateFilter::Finalized,
    ];

    pub fn value(&self) -> &'static str {
        self.display_state().label()
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }

    fn display_state(&self) -> DisplayState {
        match self {
            StateFilter::Pending => DisplayState::Pending,
            StateFilter::Overdue => DisplayState::Overdue,
            StateFilter::Finalized => DisplayState::Finalized,
        }
    }
}

/// Client-side filters of the due-date list, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DueDateFilter {
    pub client_name: String,
    pub cuit_prefix: String,
    pub due_date: Option<NaiveDate>,
    pub state: Option<StateFilter>,
    pub user_id: Option<i64>,
}

impl DueDateFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, item: &DueDateAssignment, today: NaiveDate) -> bool {
        let client = item.client();

        if !self.client_name.trim().is_empty()
            && !client.is_some_and(|c| c.name_matches(&self.client_name))
        {
            return false;
        }

        let prefix = self.cuit_prefix.trim();
        if !prefix.is_empty() && !client.is_some_and(|c| c.cuit.starts_with(prefix)) {
            return false;
        }

        if let Some(date) = self.due_date {
            if item.due_date() != Some(date) {
                return false;
            }
        }

        if let Some(state) = self.state {
            if item.display_state(today) != state.display_state() {
                return false;
            }
        }

        if let Some(user_id) = self.user_id {
            if item.attributed_user().map(|u| u.id) != Some(user_id) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(
        &self,
        items: &'a [DueDateAssignment],
        today: NaiveDate,
    ) -> Vec<&'a DueDateAssignment> {
        items.iter().filter(|i| self.matches(i, today)).collect()
    }
}

/// Options of the user dropdown: every responsible user plus the finalizers
/// of finalized rows, unique by id, sorted by label.
pub fn user_options(items: &[DueDateAssignment]) -> Vec<(i64, String)> {
    let mut by_id: BTreeMap<i64, String> = BTreeMap::new();
    for item in items {
        if let Some(u) = item.client().and_then(|c| c.responsible_user.as_ref()) {
            by_id.entry(u.id).or_insert_with(|| u.label());
        }
        if item.is_finalized() {
            if let Some(u) = item.finalized_by.as_ref() {
                by_id.entry(u.id).or_insert_with(|| u.label());
            }
        }
    }
    let mut options: Vec<(i64, String)> = by_id.into_iter().collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
    options
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::*;
    use super::super::aggregate::DueDateState;
    use super::*;

    fn today() -> NaiveDate {
        date(2025, 6, 15)
    }

    fn sample() -> Vec<DueDateAssignment> {
        let mut overdue = instance(1, "Panadería Sol", "30712345679", Some(date(2025, 6, 14)), DueDateState::Pending);
        overdue.asignacion.cliente.as_mut().unwrap().responsible_user = Some(user(7, "Juan Pérez"));

        let due_today = instance(2, "Ferretería Norte", "20111111112", Some(date(2025, 6, 15)), DueDateState::Pending);
        let no_date = instance(3, "Kiosco Sur", "30999999990", None, DueDateState::Pending);

        let mut finalized = instance(4, "Panadería Luna", "30711111110", Some(date(2025, 6, 1)), DueDateState::Finalized);
        finalized.asignacion.cliente.as_mut().unwrap().responsible_user = Some(user(7, "Juan Pérez"));
        finalized.finalized_by = Some(user(9, "Ana Díaz"));

        vec![overdue, due_today, no_date, finalized]
    }

    fn ids(filter: &DueDateFilter) -> Vec<i64> {
        let items = sample();
        filter.apply(&items, today()).iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(ids(&DueDateFilter::default()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_overdue_and_pending_are_disjoint() {
        let overdue = DueDateFilter {
            state: Some(StateFilter::Overdue),
            ..Default::default()
        };
        let pending = DueDateFilter {
            state: Some(StateFilter::Pending),
            ..Default::default()
        };
        assert_eq!(ids(&overdue), vec![1]);
        assert_eq!(ids(&pending), vec![2, 3]);
    }

    #[test]
    fn test_finalized_filter() {
        let f = DueDateFilter {
            state: Some(StateFilter::Finalized),
            ..Default::default()
        };
        assert_eq!(ids(&f), vec![4]);
    }

    #[test]
    fn test_text_filters() {
        let f = DueDateFilter {
            client_name: "panadería".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f), vec![1, 4]);

        let f = DueDateFilter {
            cuit_prefix: "3071".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f), vec![1, 4]);

        // prefix, not substring
        let f = DueDateFilter {
            cuit_prefix: "1111".into(),
            ..Default::default()
        };
        assert!(ids(&f).is_empty());
    }

    #[test]
    fn test_exact_due_date() {
        let f = DueDateFilter {
            due_date: Some(date(2025, 6, 15)),
            ..Default::default()
        };
        assert_eq!(ids(&f), vec![2]);
    }

    #[test]
    fn test_user_filter_uses_finalizer_once_finalized() {
        let responsible = DueDateFilter {
            user_id: Some(7),
            ..Default::default()
        };
        assert_eq!(ids(&responsible), vec![1]);

        let finalizer = DueDateFilter {
            user_id: Some(9),
            ..Default::default()
        };
        assert_eq!(ids(&finalizer), vec![4]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let f = DueDateFilter {
            client_name: "panadería".into(),
            state: Some(StateFilter::Overdue),
            ..Default::default()
        };
        assert_eq!(ids(&f), vec![1]);
    }

    #[test]
    fn test_user_options() {
        let options = user_options(&sample());
        assert_eq!(
            options,
            vec![(9, "Ana Díaz".to_string()), (7, "Juan Pérez".to_string())]
        );
    }

    #[test]
    fn test_state_filter_values() {
        assert_eq!(StateFilter::from_value("VENCIDO"), Some(StateFilter::Overdue));
        assert_eq!(StateFilter::from_value(""), None);
    }
}
