use thiserror::Error;

/// Failure of a call to the backend REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (CORS, offline, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Parse(String),

    /// The request body could not be built.
    #[error("invalid request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Builds an `Http` error from a status and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: extract_backend_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401 and 403 both mean the stored session is no longer usable.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Message the backend put in the error body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Backend message verbatim, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Pulls a human readable message out of an error body.
///
/// The backend answers either `{"message": "..."}` or a bare text body.
pub fn extract_backend_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_message() {
        assert_eq!(
            extract_backend_message(r#"{"message":"Usuario o contraseña inválidos"}"#),
            Some("Usuario o contraseña inválidos".to_string())
        );
        assert_eq!(extract_backend_message(r#"{"status":500}"#), None);
    }

    #[test]
    fn test_extract_plain_text() {
        assert_eq!(
            extract_backend_message("La hoja no tiene columnas válidas"),
            Some("La hoja no tiene columnas válidas".to_string())
        );
        assert_eq!(extract_backend_message("   "), None);
    }

    #[test]
    fn test_unauthorized_statuses() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::from_response(403, "").is_unauthorized());
        assert!(!ApiError::from_response(500, "").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_message_or_fallback() {
        let err = ApiError::from_response(400, r#"{"message":"Formato inválido"}"#);
        assert_eq!(err.message_or("Error desconocido"), "Formato inválido");

        let err = ApiError::Network("failed to fetch".into());
        assert_eq!(err.message_or("Error desconocido"), "Error desconocido");
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_response(404, r#"{"message":"No existe"}"#);
        assert_eq!(err.to_string(), "HTTP 404: No existe");
        assert_eq!(ApiError::from_response(500, "").to_string(), "HTTP 500");
    }
}
