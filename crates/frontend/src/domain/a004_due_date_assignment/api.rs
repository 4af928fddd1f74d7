use contracts::domain::a004_due_date_assignment::finalize::fields;
use contracts::domain::a004_due_date_assignment::{DueDateAssignment, FinalizeStateRequest};
use contracts::shared::api_error::ApiError;
use web_sys::{File, FormData};

use crate::shared::api_utils::{get_json, post_multipart, put_json};

pub async fn fetch_due_date_assignments() -> Result<Vec<DueDateAssignment>, ApiError> {
    get_json("/api/asignaciones-vencimientos").await
}

/// First finalize phase: flips the instance to FINALIZADO.
pub async fn finalize_state(id: i64, observation: &str) -> Result<(), ApiError> {
    put_json(
        &format!("/api/asignaciones-vencimientos/{}", id),
        &FinalizeStateRequest::new(observation),
    )
    .await
}

/// Second finalize phase: mails the chosen contact, one `archivosAdjuntos` part per file.
pub async fn send_notification(
    id: i64,
    contact_id: i64,
    observation: &str,
    attachments: &[File],
) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Encode("FormData".to_string()))?;
    let field = |name: &str, value: &str| {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Encode(name.to_string()))
    };
    field(fields::INSTANCE_ID, &id.to_string())?;
    field(fields::CONTACT_ID, &contact_id.to_string())?;
    field(fields::OBSERVATION, observation)?;
    for file in attachments {
        form.append_with_blob_and_filename(fields::ATTACHMENT, file, &file.name())
            .map_err(|_| ApiError::Encode(file.name()))?;
    }
    post_multipart("/api/asignaciones-vencimientos/enviar-notificacion", form).await
}
