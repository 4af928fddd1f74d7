use crate::domain::a002_client::Client;
use serde::{Deserialize, Serialize};

/// Observation stored when the user leaves the field blank.
pub const EMPTY_OBSERVATION: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedObligation {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Link between one client and one obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "idAsignacion")]
    pub id: i64,
    #[serde(default)]
    pub observacion: Option<String>,
    #[serde(default)]
    pub cliente: Option<Client>,
    pub obligacion: AssignedObligation,
    #[serde(default)]
    pub activo: bool,
}

/// Body of `POST /api/asignaciones`.
///
/// Carries the complete desired set for the client, not a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignObligationsRequest {
    #[serde(rename = "idCliente")]
    pub client_id: i64,
    #[serde(rename = "idsObligaciones")]
    pub obligation_ids: Vec<i64>,
    pub observacion: String,
}

impl AssignObligationsRequest {
    pub fn new(client_id: i64, obligation_ids: Vec<i64>, observation: &str) -> Self {
        let observacion = if observation.trim().is_empty() {
            EMPTY_OBSERVATION.to_string()
        } else {
            observation.to_string()
        };
        Self {
            client_id,
            obligation_ids,
            observacion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_observation_defaults_to_dash() {
        let req = AssignObligationsRequest::new(3, vec![1, 2], "  ");
        assert_eq!(req.observacion, "-");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"idCliente": 3, "idsObligaciones": [1, 2], "observacion": "-"})
        );
    }

    #[test]
    fn test_observation_is_kept() {
        let req = AssignObligationsRequest::new(3, vec![], "Alta anual");
        assert_eq!(req.observacion, "Alta anual");
    }

    #[test]
    fn test_assignment_from_backend() {
        let raw = r#"{"idAsignacion":10,"observacion":"-","activo":true,
            "cliente":{"idCliente":1,"nombre":"Ana","cuit":"20111111112"},
            "obligacion":{"id":5,"nombre":"IVA","descripcion":null}}"#;
        let a: Assignment = serde_json::from_str(raw).unwrap();
        assert_eq!(a.obligacion.id, 5);
        assert!(a.activo);
    }
}
