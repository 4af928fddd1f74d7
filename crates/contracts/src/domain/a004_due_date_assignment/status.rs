use super::aggregate::DueDateState;
use chrono::NaiveDate;

/// State shown to the user. `Overdue` is derived on the fly from a pending
/// instance whose due date is strictly before today; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Pending,
    Overdue,
    Finalized,
}

impl DisplayState {
    pub fn derive(state: DueDateState, due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match state {
            DueDateState::Finalized => DisplayState::Finalized,
            DueDateState::Pending => match due_date {
                Some(due) if due < today => DisplayState::Overdue,
                _ => DisplayState::Pending,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::Pending => "PENDIENTE",
            DisplayState::Overdue => "VENCIDO",
            DisplayState::Finalized => "FINALIZADO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_overdue_is_strictly_before_today() {
        let today = d(15);
        assert_eq!(DisplayState::derive(DueDateState::Pending, Some(d(14)), today), DisplayState::Overdue);
        assert_eq!(DisplayState::derive(DueDateState::Pending, Some(d(15)), today), DisplayState::Pending);
        assert_eq!(DisplayState::derive(DueDateState::Pending, Some(d(16)), today), DisplayState::Pending);
    }

    #[test]
    fn test_missing_date_is_never_overdue() {
        assert_eq!(DisplayState::derive(DueDateState::Pending, None, d(15)), DisplayState::Pending);
    }

    #[test]
    fn test_finalized_ignores_date() {
        assert_eq!(
            DisplayState::derive(DueDateState::Finalized, Some(d(1)), d(15)),
            DisplayState::Finalized
        );
        assert_eq!(DisplayState::Overdue.label(), "VENCIDO");
    }
}
