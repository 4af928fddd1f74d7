use contracts::shared::api_error::ApiError;
use contracts::system::notifications::UpcomingDueDate;

use crate::shared::api_utils::get_json;

pub async fn fetch_upcoming() -> Result<Vec<UpcomingDueDate>, ApiError> {
    get_json("/api/asignaciones-vencimientos/proximas-a-vencer").await
}
