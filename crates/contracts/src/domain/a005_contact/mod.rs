use serde::{Deserialize, Serialize};

/// Contact person of a client; recipient of finalization e-mails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "idContacto")]
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    #[serde(rename = "numTelefono", default)]
    pub num_telefono: Option<String>,
}

impl Contact {
    /// "{nombre} ({correo})"
    pub fn label(&self) -> String {
        format!("{} ({})", self.nombre, self.correo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_label() {
        let raw = r#"{"idContacto":3,"nombre":"Laura","correo":"laura@estudio.com","numTelefono":"11-5555","cliente":{"idCliente":1}}"#;
        let c: Contact = serde_json::from_str(raw).unwrap();
        assert_eq!(c.label(), "Laura (laura@estudio.com)");
    }
}
