pub mod session;

use crate::shared::api_error::ApiError;
use crate::system::users::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "tokenType", default)]
    pub token_type: String,
    #[serde(rename = "usuarioLogueado")]
    pub user: LoggedUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "idRole")]
    pub id: i64,
    pub name: String,
}

/// Current user as returned by login and `/api/auth/userLogueado`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedUser {
    #[serde(rename = "idUsuario")]
    pub id: i64,
    #[serde(default)]
    pub cuit: Option<String>,
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "nombreApellido", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl LoggedUser {
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

/// The session user as the reference stored on records it touches.
impl From<&LoggedUser> for User {
    fn from(u: &LoggedUser) -> Self {
        User {
            id: u.id,
            username: Some(u.username.clone()),
            full_name: u.full_name.clone(),
            correo: u.correo.clone(),
        }
    }
}

/// Message shown on the login form for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => err.message_or("Error de credenciales"),
        _ => "Error al conectar con el servidor".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response() {
        let raw = r#"{"accessToken":"abc","tokenType":"Bearer ","usuarioLogueado":{
            "idUsuario":1,"cuit":"20123456789","nombreUsuario":"admin",
            "nombreApellido":"Admin Contable","correo":"admin@c360.com",
            "roles":[{"idRole":1,"name":"ADMIN"}]}}"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.token_type, "Bearer ");
        assert_eq!(resp.user.display_name(), "Admin Contable");
        assert_eq!(
            resp.user.roles,
            vec![Role {
                id: 1,
                name: "ADMIN".into()
            }]
        );

        let user = User::from(&resp.user);
        assert_eq!(user.id, 1);
        assert_eq!(user.label(), "Admin Contable");
    }

    #[test]
    fn test_login_error_message_is_verbatim() {
        let err = ApiError::from_response(401, r#"{"message":"Usuario o contraseña incorrectos"}"#);
        assert_eq!(login_error_message(&err), "Usuario o contraseña incorrectos");

        let err = ApiError::from_response(401, "");
        assert_eq!(login_error_message(&err), "Error de credenciales");

        let err = ApiError::Network("failed to fetch".into());
        assert_eq!(login_error_message(&err), "Error al conectar con el servidor");
    }
}
