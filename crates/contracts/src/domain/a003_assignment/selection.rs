use super::aggregate::{AssignObligationsRequest, Assignment};
use std::collections::BTreeSet;

/// Checklist state of the "assign obligations" screen.
///
/// Seeded from the client's current assignments, so unchecking an already
/// assigned obligation and saving removes it. The default value belongs to
/// no client and cannot be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObligationSelection {
    client_id: Option<i64>,
    initial: BTreeSet<i64>,
    selected: BTreeSet<i64>,
}

impl ObligationSelection {
    pub fn from_assignments(client_id: i64, assignments: &[Assignment]) -> Self {
        let ids: BTreeSet<i64> = assignments.iter().map(|a| a.obligacion.id).collect();
        Self {
            client_id: Some(client_id),
            initial: ids.clone(),
            selected: ids,
        }
    }

    /// True once the assignments of `client_id` seeded this selection.
    pub fn is_loaded_for(&self, client_id: i64) -> bool {
        self.client_id == Some(client_id)
    }

    /// Full desired set for `client_id`; `None` while another client's
    /// assignments (or none) are loaded.
    pub fn request_for(
        &self,
        client_id: i64,
        observation: &str,
    ) -> Option<AssignObligationsRequest> {
        self.is_loaded_for(client_id)
            .then(|| AssignObligationsRequest::new(client_id, self.ids(), observation))
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn set(&mut self, id: i64, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn toggle(&mut self, id: i64) {
        let checked = !self.is_selected(id);
        self.set(id, checked);
    }

    /// Sorted ids to submit.
    pub fn ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.initial != self.selected
    }

    /// Ids that were assigned when the client was loaded and are now unchecked.
    pub fn removed(&self) -> Vec<i64> {
        self.initial.difference(&self.selected).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_assignment::aggregate::AssignedObligation;

    fn assignment(id: i64, obligation_id: i64) -> Assignment {
        Assignment {
            id,
            observacion: None,
            cliente: None,
            obligacion: AssignedObligation {
                id: obligation_id,
                nombre: format!("Obligación {obligation_id}"),
                descripcion: None,
            },
            activo: true,
        }
    }

    #[test]
    fn test_seed_from_assignments() {
        let sel = ObligationSelection::from_assignments(5, &[assignment(1, 7), assignment(2, 3)]);
        assert_eq!(sel.ids(), vec![3, 7]);
        assert!(!sel.is_dirty());
    }

    #[test]
    fn test_uncheck_expresses_deassignment() {
        let mut sel = ObligationSelection::from_assignments(5, &[assignment(1, 7), assignment(2, 3)]);
        sel.toggle(7);
        sel.set(9, true);
        assert_eq!(sel.ids(), vec![3, 9]);
        assert_eq!(sel.removed(), vec![7]);
        assert!(sel.is_dirty());
    }

    #[test]
    fn test_reseed_reproduces_submitted_set() {
        let mut sel = ObligationSelection::from_assignments(5, &[]);
        for id in [4, 1, 8] {
            sel.set(id, true);
        }
        let submitted = sel.ids();

        // the backend answers the new assignments for the client
        let stored: Vec<Assignment> = submitted
            .iter()
            .enumerate()
            .map(|(i, id)| assignment(i as i64, *id))
            .collect();
        let reopened = ObligationSelection::from_assignments(5, &stored);
        assert_eq!(reopened.ids(), submitted);
    }

    #[test]
    fn test_request_needs_assignments_of_same_client() {
        assert_eq!(ObligationSelection::default().request_for(5, ""), None);

        // client 5 is still loaded after client 9 was picked
        let sel = ObligationSelection::from_assignments(5, &[assignment(1, 7)]);
        assert!(!sel.is_loaded_for(9));
        assert_eq!(sel.request_for(9, ""), None);

        let request = sel.request_for(5, "alta").unwrap();
        assert_eq!(request.client_id, 5);
        assert_eq!(request.obligation_ids, vec![7]);
        assert_eq!(request.observacion, "alta");
    }
}
