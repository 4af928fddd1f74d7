use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoggedUser, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, send_error};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}

/// Current user for the given `Authorization` header value
pub async fn who_am_i(authorization: String) -> Result<LoggedUser, ApiError> {
    let response = Request::get(&api_url("/api/auth/userLogueado"))
        .header("Authorization", &authorization)
        .send()
        .await
        .map_err(send_error)?;

    read_json(response).await
}
