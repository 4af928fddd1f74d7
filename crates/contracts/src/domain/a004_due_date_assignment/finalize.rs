//! Finalizing a due-date instance.
//!
//! Two independent requests: the state transition (PUT) and the e-mail
//! notification (multipart POST). They are not atomic. Once the first one
//! succeeds the instance stays finalized even if the second one fails, so the
//! outcome tells the caller which phase to retry.

use super::aggregate::DueDateState;
use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Multipart field names of `/api/asignaciones-vencimientos/enviar-notificacion`.
pub mod fields {
    pub const INSTANCE_ID: &str = "idAsignacionVencimiento";
    pub const CONTACT_ID: &str = "idContactoDestinatario";
    pub const OBSERVATION: &str = "observacion";
    pub const ATTACHMENT: &str = "archivosAdjuntos";
}

pub const MISSING_FIELDS: &str = "Debe seleccionar un contacto y proporcionar una observación.";

/// Body of `PUT /api/asignaciones-vencimientos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeStateRequest {
    pub estado: DueDateState,
    pub observacion: String,
}

impl FinalizeStateRequest {
    pub fn new(observacion: &str) -> Self {
        Self {
            estado: DueDateState::Finalized,
            observacion: observacion.to_string(),
        }
    }
}

/// Inputs collected by the finalize modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalizeForm {
    pub contact_id: Option<i64>,
    pub observation: String,
}

impl FinalizeForm {
    /// Contact id and observation, or the message shown in the modal.
    pub fn validate(&self) -> Result<(i64, String), &'static str> {
        match self.contact_id {
            Some(id) if !self.observation.trim().is_empty() => Ok((id, self.observation.clone())),
            _ => Err(MISSING_FIELDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// State committed and notification sent.
    Completed,
    /// State committed; only the notification has to be retried.
    NotificationFailed { error: ApiError },
    /// Nothing changed on the backend; the notification was not attempted.
    StateFailed { error: ApiError },
}

impl FinalizeOutcome {
    pub fn state_committed(&self) -> bool {
        !matches!(self, FinalizeOutcome::StateFailed { .. })
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FinalizeOutcome::Completed => None,
            FinalizeOutcome::NotificationFailed { error } | FinalizeOutcome::StateFailed { error } => {
                Some(error)
            }
        }
    }

    pub fn user_message(&self) -> Option<String> {
        match self {
            FinalizeOutcome::Completed => None,
            FinalizeOutcome::StateFailed { error } => Some(format!(
                "Error al finalizar la asignación: {}",
                error.message_or(&error.to_string())
            )),
            FinalizeOutcome::NotificationFailed { error } => Some(format!(
                "La asignación quedó finalizada, pero no se pudo enviar la notificación: {}",
                error.message_or(&error.to_string())
            )),
        }
    }
}

/// Runs both phases in order. `notify` is never called when `update_state` fails.
pub async fn finalize<S, SF, N, NF>(update_state: S, notify: N) -> FinalizeOutcome
where
    S: FnOnce() -> SF,
    SF: Future<Output = Result<(), ApiError>>,
    N: FnOnce() -> NF,
    NF: Future<Output = Result<(), ApiError>>,
{
    if let Err(error) = update_state().await {
        return FinalizeOutcome::StateFailed { error };
    }
    match notify().await {
        Ok(()) => FinalizeOutcome::Completed,
        Err(error) => FinalizeOutcome::NotificationFailed { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_both_phases_succeed() {
        let notified = Cell::new(false);
        let outcome = block_on(finalize(
            || async { Ok::<(), ApiError>(()) },
            || async {
                notified.set(true);
                Ok::<(), ApiError>(())
            },
        ));
        assert_eq!(outcome, FinalizeOutcome::Completed);
        assert!(notified.get());
        assert!(outcome.user_message().is_none());
    }

    #[test]
    fn test_state_failure_skips_notification() {
        let notified = Cell::new(false);
        let outcome = block_on(finalize(
            || async { Err::<(), ApiError>(ApiError::from_response(409, r#"{"message":"Ya finalizada"}"#)) },
            || async {
                notified.set(true);
                Ok::<(), ApiError>(())
            },
        ));
        assert!(!notified.get());
        assert!(!outcome.state_committed());
        assert_eq!(
            outcome.user_message().as_deref(),
            Some("Error al finalizar la asignación: Ya finalizada")
        );
    }

    #[test]
    fn test_notification_failure_keeps_state_committed() {
        let outcome = block_on(finalize(
            || async { Ok::<(), ApiError>(()) },
            || async { Err::<(), ApiError>(ApiError::Network("failed to fetch".into())) },
        ));
        assert!(outcome.state_committed());
        assert!(matches!(outcome, FinalizeOutcome::NotificationFailed { .. }));
        assert!(matches!(outcome.error(), Some(ApiError::Network(_))));
    }

    #[test]
    fn test_form_validation() {
        assert_eq!(FinalizeForm::default().validate(), Err(MISSING_FIELDS));
        let blank = FinalizeForm {
            contact_id: Some(1),
            observation: "  ".into(),
        };
        assert_eq!(blank.validate(), Err(MISSING_FIELDS));
        let ok = FinalizeForm {
            contact_id: Some(1),
            observation: "F931 presentado".into(),
        };
        assert_eq!(ok.validate(), Ok((1, "F931 presentado".to_string())));
    }

    #[test]
    fn test_state_request_body() {
        let json = serde_json::to_value(FinalizeStateRequest::new("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"estado": "FINALIZADO", "observacion": "ok"}));
    }
}
