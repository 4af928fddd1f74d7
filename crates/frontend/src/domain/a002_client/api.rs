use contracts::domain::a002_client::Client;
use contracts::domain::a003_assignment::Assignment;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    get_json("/api/clientes").await
}

/// Current obligation assignments of a client.
pub async fn fetch_client_assignments(client_id: i64) -> Result<Vec<Assignment>, ApiError> {
    get_json(&format!("/api/asignaciones/cliente/{}", client_id)).await
}
