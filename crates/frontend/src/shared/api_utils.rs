//! API utilities for frontend-backend communication
//!
//! Base URL resolution plus thin wrappers over `gloo_net` that attach the
//! session's `Authorization` header and turn every failure into [`ApiError`].

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::app_config;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// The configured base URL when present, otherwise the current page's
/// protocol and host with the configured backend port
/// (e.g. "http://localhost:3000").
pub fn api_base() -> String {
    let config = app_config();
    if let Some(url) = config.api.base_url.as_ref() {
        return url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api.port)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Adds the stored session's `Authorization` header, if any.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::current_session() {
        Some(session) => builder.header("Authorization", &session.authorization_header()),
        None => builder,
    }
}

pub fn send_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn encode_error(e: gloo_net::Error) -> ApiError {
    ApiError::Encode(e.to_string())
}

/// Non-success statuses become `ApiError::Http` carrying the backend message.
pub async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} -> HTTP {}", response.url(), status);
    Err(ApiError::from_response(status, &body))
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(send_error)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(encode_error)?
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(Request::put(&api_url(path)))
        .json(body)
        .map_err(encode_error)?
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await.map(|_| ())
}

/// POST without a body (link endpoints that carry everything in the path).
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await.map(|_| ())
}

/// POST a `multipart/form-data` body. The browser sets the boundary header.
pub async fn post_multipart(path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
    let response = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(encode_error)?
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await.map(|_| ())
}
