use crate::domain::a001_obligation::api;
use crate::system::notifications::store::NotificationStore;
use contracts::domain::a001_obligation::{
    create_error_message, update_error_message, DueDateMatrix, ObligationForm,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const CREATED: &str = "Obligación creada exitosamente.";
pub const UPDATED: &str = "Obligación modificada exitosamente.";

/// ViewModel of the obligation editor
#[derive(Clone, Copy)]
pub struct ObligationDetailsViewModel {
    pub form: RwSignal<ObligationForm>,
    pub matrix: RwSignal<DueDateMatrix>,
    /// Shown under the name field
    pub name_error: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl Default for ObligationDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ObligationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ObligationForm::default()),
            matrix: RwSignal::new(DueDateMatrix::empty()),
            name_error: RwSignal::new(None),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Loads the obligation and its due dates when editing.
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            let loaded = async {
                let obligation = api::fetch_obligation(id).await?;
                let matrix = api::fetch_due_date_matrix(id).await?;
                Ok::<_, contracts::shared::api_error::ApiError>((obligation, matrix))
            }
            .await;
            match loaded {
                Ok((obligation, matrix)) => {
                    vm.form.set(ObligationForm::from_aggregate(obligation));
                    vm.matrix.set(matrix);
                }
                Err(e) => {
                    log::error!("loading obligation {}: {e}", id);
                    vm.error
                        .set(Some(e.message_or("Error al cargar la obligación.")));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Validates, then creates or updates.
    ///
    /// Create resets the form for the next obligation; update refreshes the
    /// shared notification list since due dates may have moved.
    pub fn save_command(&self, on_saved: Callback<()>, notifications: NotificationStore) {
        let form = self.form.get_untracked();
        if let Err(message) = form.validate() {
            self.name_error.set(Some(message.to_string()));
            return;
        }
        self.name_error.set(None);
        self.error.set(None);
        self.success.set(None);

        let payload = form.to_payload(self.matrix.get_untracked().flatten());
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match form.id {
                None => match api::create_obligation(&payload).await {
                    Ok(()) => {
                        vm.success.set(Some(CREATED.to_string()));
                        vm.form.set(ObligationForm::default());
                        vm.matrix.set(DueDateMatrix::empty());
                        on_saved.run(());
                    }
                    Err(e) => {
                        log::error!("creating obligation: {e}");
                        vm.error.set(Some(create_error_message(&e)));
                    }
                },
                Some(id) => match api::update_obligation(id, &payload).await {
                    Ok(()) => {
                        vm.success.set(Some(UPDATED.to_string()));
                        notifications.fetch();
                        on_saved.run(());
                    }
                    Err(e) => {
                        log::error!("updating obligation {}: {e}", id);
                        vm.error.set(Some(update_error_message(&e)));
                    }
                },
            }
            vm.saving.try_set(false);
        });
    }
}
