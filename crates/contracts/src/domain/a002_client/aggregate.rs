use crate::shared::text_filter::{contains_ci, opt_contains_ci};
use crate::system::users::User;
use serde::{Deserialize, Serialize};

/// Client of the accounting firm. At least one of `nombre` / `razon_social` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id: i64,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(rename = "razonSocial", default)]
    pub razon_social: Option<String>,
    #[serde(default)]
    pub cuit: String,
    #[serde(rename = "usuarioResponsable", default)]
    pub responsible_user: Option<User>,
}

impl Client {
    /// Name, else legal name, else "Cliente".
    pub fn display_name(&self) -> String {
        [self.nombre.as_deref(), self.razon_social.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("Cliente")
            .to_string()
    }

    /// Picker search: name or legal name ignoring case, or a CUIT substring.
    pub fn matches_search(&self, filter: &str) -> bool {
        let filter = filter.trim();
        if filter.is_empty() {
            return true;
        }
        opt_contains_ci(self.nombre.as_deref(), filter)
            || opt_contains_ci(self.razon_social.as_deref(), filter)
            || self.cuit.contains(filter)
    }

    /// Client name filter of the due-date list.
    pub fn name_matches(&self, filter: &str) -> bool {
        contains_ci(&self.display_name(), filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(nombre: Option<&str>, razon_social: Option<&str>, cuit: &str) -> Client {
        Client {
            id: 1,
            nombre: nombre.map(Into::into),
            razon_social: razon_social.map(Into::into),
            cuit: cuit.into(),
            responsible_user: None,
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(client(Some("Juan"), Some("Juan SA"), "").display_name(), "Juan");
        assert_eq!(client(None, Some("Juan SA"), "").display_name(), "Juan SA");
        assert_eq!(client(Some(" "), None, "").display_name(), "Cliente");
    }

    #[test]
    fn test_matches_search() {
        let c = client(Some("Panadería Sol"), Some("Sol del Sur SRL"), "30-71234567-9");
        assert!(c.matches_search("panader"));
        assert!(c.matches_search("SUR"));
        assert!(c.matches_search("71234"));
        assert!(!c.matches_search("luna"));
        assert!(c.matches_search(""));
    }

    #[test]
    fn test_matches_search_with_missing_names() {
        let c = client(None, None, "20-11111111-2");
        assert!(!c.matches_search("sol"));
        assert!(c.matches_search("1111"));
        assert!(c.matches_search("   "));

        let c = client(None, Some("Sol del Sur SRL"), "");
        assert!(c.matches_search("sur"));
        assert!(!c.matches_search("luna"));
    }

    #[test]
    fn test_deserialize_with_responsible() {
        let raw = r#"{"idCliente":4,"nombre":"Ana","cuit":"20111111112",
            "usuarioResponsable":{"idUsuario":2,"nombreUsuario":"mgomez","nombreApellido":"María Gómez"}}"#;
        let c: Client = serde_json::from_str(raw).unwrap();
        assert_eq!(c.responsible_user.map(|u| u.id), Some(2));
        assert_eq!(c.razon_social, None);
    }
}
