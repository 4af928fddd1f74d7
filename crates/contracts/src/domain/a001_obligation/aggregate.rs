use crate::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Recurring compliance duty (IVA, Ganancias, Cargas sociales...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obligation {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

// ============================================================================
// Due dates
// ============================================================================

/// Due-date rule as returned by `/api/obligaciones/{id}/vencimientos`.
///
/// Extra fields of the response are ignored; `dia` may come back empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DueDateRecord {
    pub mes: i32,
    #[serde(rename = "terminacionCuit")]
    pub terminacion_cuit: i32,
    #[serde(default)]
    pub dia: Option<u32>,
}

/// Due-date rule as sent to the backend: always fully set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueDateEntry {
    pub mes: u32,
    #[serde(rename = "terminacionCuit")]
    pub terminacion_cuit: u32,
    pub dia: u32,
}

impl From<DueDateEntry> for DueDateRecord {
    fn from(e: DueDateEntry) -> Self {
        Self {
            mes: e.mes as i32,
            terminacion_cuit: e.terminacion_cuit as i32,
            dia: Some(e.dia),
        }
    }
}

// ============================================================================
// Create / update body
// ============================================================================

/// Body of `POST /api/obligaciones` and `PUT /api/obligaciones/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObligationPayload {
    pub nombre: String,
    pub descripcion: String,
    pub observaciones: String,
    pub vencimientos: Vec<DueDateEntry>,
}

/// Editable form behind the obligation editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObligationForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub observaciones: String,
}

impl ObligationForm {
    pub fn from_aggregate(o: Obligation) -> Self {
        Self {
            id: Some(o.id),
            nombre: o.nombre,
            descripcion: o.descripcion.unwrap_or_default(),
            observaciones: o.observaciones.unwrap_or_default(),
        }
    }

    /// Local check run before any request is issued.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre es obligatorio.");
        }
        Ok(())
    }

    pub fn to_payload(&self, vencimientos: Vec<DueDateEntry>) -> ObligationPayload {
        ObligationPayload {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            observaciones: self.observaciones.clone(),
            vencimientos,
        }
    }
}

pub const CREATE_FAILED: &str = "Error al crear la obligación. Por favor, intenta nuevamente.";

/// Backend message when the create request carried one, else a generic retry hint.
pub fn create_error_message(err: &ApiError) -> String {
    err.message_or(CREATE_FAILED)
}

pub fn update_error_message(err: &ApiError) -> String {
    format!(
        "Error al modificar la obligación. {}",
        err.message_or(&err.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_obligation::DueDateMatrix;

    #[test]
    fn test_blank_name_is_rejected() {
        let form = ObligationForm {
            nombre: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err("El nombre es obligatorio."));
    }

    #[test]
    fn test_create_without_due_dates_sends_empty_list() {
        let form = ObligationForm {
            nombre: "IVA Mensual".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        let payload = form.to_payload(DueDateMatrix::empty().flatten());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "IVA Mensual",
                "descripcion": "",
                "observaciones": "",
                "vencimientos": []
            })
        );
    }

    #[test]
    fn test_record_ignores_extra_fields() {
        let raw = r#"[{"id":7,"mes":3,"terminacionCuit":4,"dia":18,"obligacion":{"id":1}},
                      {"mes":5,"terminacionCuit":0,"dia":null}]"#;
        let records: Vec<DueDateRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records[0].dia, Some(18));
        assert_eq!(records[1].dia, None);
    }

    #[test]
    fn test_obligation_optional_fields() {
        let o: Obligation = serde_json::from_str(r#"{"id":1,"nombre":"Ganancias"}"#).unwrap();
        let form = ObligationForm::from_aggregate(o);
        assert_eq!(form.id, Some(1));
        assert_eq!(form.descripcion, "");
    }

    #[test]
    fn test_create_error_uses_backend_message() {
        let err = ApiError::from_response(400, r#"{"message":"Ya existe una obligación con ese nombre"}"#);
        assert_eq!(
            create_error_message(&err),
            "Ya existe una obligación con ese nombre"
        );
    }

    #[test]
    fn test_create_error_without_backend_message() {
        assert_eq!(create_error_message(&ApiError::from_response(500, "")), CREATE_FAILED);
        assert_eq!(
            create_error_message(&ApiError::Network("failed to fetch".into())),
            CREATE_FAILED
        );
    }

    #[test]
    fn test_update_error_message() {
        let err = ApiError::from_response(409, r#"{"message":"Obligación en uso"}"#);
        assert_eq!(
            update_error_message(&err),
            "Error al modificar la obligación. Obligación en uso"
        );
        assert_eq!(
            update_error_message(&ApiError::from_response(500, "")),
            "Error al modificar la obligación. HTTP 500"
        );
    }
}
