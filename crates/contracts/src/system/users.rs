use crate::shared::text_filter::contains_ci;
use serde::{Deserialize, Serialize};

/// Backoffice user, as listed by `/api/usuarios` and embedded as a reference elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "idUsuario")]
    pub id: i64,
    #[serde(rename = "nombreUsuario", default)]
    pub username: Option<String>,
    #[serde(rename = "nombreApellido", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
}

impl User {
    /// Users without a username never match a search.
    pub fn matches_search(&self, filter: &str) -> bool {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => contains_ci(name, filter),
            _ => false,
        }
    }

    /// Full name, else username, else "Usuario {id}".
    pub fn label(&self) -> String {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Usuario {}", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: Option<&str>, full_name: Option<&str>) -> User {
        User {
            id,
            username: username.map(Into::into),
            full_name: full_name.map(Into::into),
            correo: None,
        }
    }

    #[test]
    fn test_search_requires_username() {
        assert!(user(1, Some("mgomez"), None).matches_search("GOM"));
        assert!(!user(2, None, Some("Mario Gómez")).matches_search("gom"));
        assert!(!user(3, Some(""), None).matches_search(""));
    }

    #[test]
    fn test_label() {
        assert_eq!(user(1, Some("mgomez"), Some("María Gómez")).label(), "María Gómez");
        assert_eq!(user(1, Some("mgomez"), None).label(), "mgomez");
        assert_eq!(user(9, None, None).label(), "Usuario 9");
    }
}
