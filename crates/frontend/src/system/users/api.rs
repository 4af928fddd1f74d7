use contracts::shared::api_error::ApiError;
use contracts::system::users::User;

use crate::shared::api_utils::get_json;

/// All backoffice users (candidates for client responsible).
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json("/api/usuarios").await
}
