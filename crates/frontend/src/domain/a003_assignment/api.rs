use contracts::domain::a003_assignment::AssignObligationsRequest;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{post_empty, post_json};

/// Replaces the client's assigned obligations with `request.obligation_ids`.
pub async fn assign_obligations(request: &AssignObligationsRequest) -> Result<(), ApiError> {
    post_json("/api/asignaciones", request).await
}

pub async fn assign_responsible(client_id: i64, user_id: i64) -> Result<(), ApiError> {
    post_empty(&format!(
        "/api/clientes/asignar/{}/usuario/{}",
        client_id, user_id
    ))
    .await
}
