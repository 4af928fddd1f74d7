use crate::domain::a004_due_date_assignment::api;
use crate::domain::a005_contact::api as contact_api;
use contracts::domain::a004_due_date_assignment::{finalize, FinalizeForm, FinalizeOutcome};
use contracts::domain::a005_contact::Contact;
use contracts::shared::attachments::{AttachmentKey, AttachmentSet};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, FileList};

const CONTACTS_FAILED: &str = "Error al cargar los contactos del cliente.";

fn attachment_key(file: &File) -> AttachmentKey {
    AttachmentKey {
        name: file.name(),
        size: file.size() as u64,
        last_modified: file.last_modified() as i64,
    }
}

/// ViewModel of the finalize modal.
///
/// `committed` flips once the state change is accepted; from then on
/// submitting only re-sends the notification.
#[derive(Clone, Copy)]
pub struct FinalizeViewModel {
    pub instance_id: i64,
    pub contacts: RwSignal<Vec<Contact>>,
    pub form: RwSignal<FinalizeForm>,
    pub attachments: RwSignal<AttachmentSet<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub committed: RwSignal<bool>,
}

impl FinalizeViewModel {
    /// `busy` is owned by the opener so the modal frame can refuse to close mid-request.
    pub fn new(instance_id: i64, busy: RwSignal<bool>) -> Self {
        Self {
            instance_id,
            contacts: RwSignal::new(Vec::new()),
            form: RwSignal::new(FinalizeForm::default()),
            attachments: RwSignal::new_local(AttachmentSet::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            busy,
            committed: RwSignal::new(false),
        }
    }

    pub fn load_contacts(&self, client_id: Option<i64>) {
        let Some(client_id) = client_id else {
            self.error.set(Some(CONTACTS_FAILED.to_string()));
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match contact_api::fetch_client_contacts(client_id).await {
                Ok(list) => {
                    vm.contacts.try_set(list);
                }
                Err(e) => {
                    log::error!("loading contacts of client {}: {e}", client_id);
                    vm.error.try_set(Some(CONTACTS_FAILED.to_string()));
                }
            }
            vm.loading.try_set(false);
        });
    }

    pub fn select_contact(&self, value: &str) {
        let contact_id = value.parse::<i64>().ok();
        self.form.update(|f| f.contact_id = contact_id);
    }

    /// Accumulates a multi-select; files already listed are skipped.
    pub fn add_files(&self, files: FileList) {
        let picked = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|f| (attachment_key(&f), f))
            .collect::<Vec<_>>();
        let offered = picked.len();
        let added = self
            .attachments
            .try_update(|set| set.extend(picked))
            .unwrap_or(0);
        if added < offered {
            log::debug!("{} duplicate attachment(s) ignored", offered - added);
        }
    }

    pub fn remove_attachment(&self, index: usize) {
        self.attachments.update(|set| {
            set.remove(index);
        });
    }

    /// Runs both phases, or only the notification after a committed state.
    ///
    /// `on_committed` receives the observation once the backend accepted the
    /// state change; `on_done` closes the modal.
    pub fn submit(&self, on_committed: Callback<String>, on_done: Callback<()>) {
        let (contact_id, observation) = match self.form.get_untracked().validate() {
            Ok(valid) => valid,
            Err(message) => {
                self.error.set(Some(message.to_string()));
                return;
            }
        };
        self.error.set(None);
        self.busy.set(true);

        let vm = *self;
        let id = vm.instance_id;
        let files: Vec<File> = vm
            .attachments
            .with_untracked(|set| set.files().cloned().collect());
        let retry = vm.committed.get_untracked();

        spawn_local(async move {
            let outcome = if retry {
                match api::send_notification(id, contact_id, &observation, &files).await {
                    Ok(()) => FinalizeOutcome::Completed,
                    Err(error) => FinalizeOutcome::NotificationFailed { error },
                }
            } else {
                finalize(
                    || api::finalize_state(id, &observation),
                    || api::send_notification(id, contact_id, &observation, &files),
                )
                .await
            };

            if let Some(e) = outcome.error() {
                log::error!("finalizing due date {}: {e}", id);
            }
            if !retry && outcome.state_committed() {
                vm.committed.try_set(true);
                on_committed.run(observation.clone());
            }
            vm.busy.try_set(false);
            match outcome.user_message() {
                None => on_done.run(()),
                Some(message) => {
                    vm.error.try_set(Some(message));
                }
            }
        });
    }
}
