use super::status::DisplayState;
use crate::domain::a002_client::Client;
use crate::domain::a003_assignment::Assignment;
use crate::shared::dates::optional_date;
use crate::system::users::User;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// State
// ============================================================================

/// Stored lifecycle state. `PENDIENTE -> FINALIZADO` happens once and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DueDateState {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "FINALIZADO")]
    Finalized,
}

impl DueDateState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueDateState::Pending => "PENDIENTE",
            DueDateState::Finalized => "FINALIZADO",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateRef {
    #[serde(rename = "fechaVencimiento", with = "optional_date", default)]
    pub fecha_vencimiento: Option<NaiveDate>,
}

/// One concrete occurrence of an assignment against a due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateAssignment {
    #[serde(rename = "idAsignacionVencimiento")]
    pub id: i64,
    pub asignacion: Assignment,
    pub vencimiento: DueDateRef,
    pub estado: DueDateState,
    #[serde(rename = "fechaFinalizacion", with = "optional_date", default)]
    pub fecha_finalizacion: Option<NaiveDate>,
    #[serde(default)]
    pub observacion: Option<String>,
    #[serde(rename = "usuarioFinalizo", default)]
    pub finalized_by: Option<User>,
}

impl DueDateAssignment {
    pub fn client(&self) -> Option<&Client> {
        self.asignacion.cliente.as_ref()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.vencimiento.fecha_vencimiento
    }

    pub fn is_finalized(&self) -> bool {
        self.estado == DueDateState::Finalized
    }

    /// The finalize action is only offered while the instance is pending.
    pub fn can_finalize(&self) -> bool {
        !self.is_finalized()
    }

    pub fn display_state(&self, today: NaiveDate) -> DisplayState {
        DisplayState::derive(self.estado, self.due_date(), today)
    }

    /// User the row is attributed to: the finalizer once finalized, the
    /// client's responsible user before that.
    pub fn attributed_user(&self) -> Option<&User> {
        if self.is_finalized() {
            self.finalized_by.as_ref()
        } else {
            self.client().and_then(|c| c.responsible_user.as_ref())
        }
    }

    pub fn responsible_label(&self) -> String {
        let name = self
            .attributed_user()
            .and_then(|u| u.full_name.clone())
            .filter(|n| !n.trim().is_empty());
        match (name, self.is_finalized()) {
            (Some(n), _) => n,
            (None, true) => "No Asignado".to_string(),
            (None, false) => "No asignado".to_string(),
        }
    }

    /// Local copy of the state transition once the backend accepted it.
    pub fn mark_finalized(&mut self, today: NaiveDate, observation: &str, by: Option<User>) {
        self.estado = DueDateState::Finalized;
        self.fecha_finalizacion = Some(today);
        self.observacion = Some(observation.to_string());
        if by.is_some() {
            self.finalized_by = by;
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::a003_assignment::AssignedObligation;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn user(id: i64, full_name: &str) -> User {
        User {
            id,
            username: Some(full_name.to_lowercase().replace(' ', ".")),
            full_name: Some(full_name.to_string()),
            correo: None,
        }
    }

    pub fn instance(
        id: i64,
        client_name: &str,
        cuit: &str,
        due: Option<NaiveDate>,
        estado: DueDateState,
    ) -> DueDateAssignment {
        DueDateAssignment {
            id,
            asignacion: Assignment {
                id: id * 10,
                observacion: None,
                cliente: Some(Client {
                    id: id * 100,
                    nombre: Some(client_name.to_string()),
                    razon_social: None,
                    cuit: cuit.to_string(),
                    responsible_user: None,
                }),
                obligacion: AssignedObligation {
                    id: 1,
                    nombre: "IVA Mensual".to_string(),
                    descripcion: None,
                },
                activo: true,
            },
            vencimiento: DueDateRef {
                fecha_vencimiento: due,
            },
            estado,
            fecha_finalizacion: None,
            observacion: None,
            finalized_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let raw = r#"{
            "idAsignacionVencimiento": 41,
            "asignacion": {
                "idAsignacion": 8, "observacion": "-", "activo": true,
                "cliente": {"idCliente": 2, "nombre": "Ana", "cuit": "27222222223",
                    "usuarioResponsable": {"idUsuario": 5, "nombreUsuario": "jperez", "nombreApellido": "Juan Pérez"}},
                "obligacion": {"id": 1, "nombre": "IVA"}
            },
            "vencimiento": {"fechaVencimiento": "2025-04-18"},
            "estado": "PENDIENTE",
            "fechaFinalizacion": null,
            "observacion": null,
            "usuarioFinalizo": null
        }"#;
        let item: DueDateAssignment = serde_json::from_str(raw).unwrap();
        assert_eq!(item.due_date(), Some(date(2025, 4, 18)));
        assert_eq!(item.responsible_label(), "Juan Pérez");
        assert!(item.can_finalize());
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        let raw = r#"{"idAsignacionVencimiento":1,
            "asignacion":{"idAsignacion":1,"obligacion":{"id":1,"nombre":"IVA"}},
            "vencimiento":{"fechaVencimiento":null},"estado":"ANULADO"}"#;
        assert!(serde_json::from_str::<DueDateAssignment>(raw).is_err());
    }

    #[test]
    fn test_finalize_is_one_way() {
        let mut item = instance(1, "Ana", "2011", Some(date(2025, 1, 10)), DueDateState::Pending);
        item.mark_finalized(date(2025, 1, 12), "Presentado", Some(user(3, "Sofía Ruiz")));
        assert!(item.is_finalized());
        assert!(!item.can_finalize());
        assert_eq!(item.fecha_finalizacion, Some(date(2025, 1, 12)));
        assert_eq!(item.responsible_label(), "Sofía Ruiz");
    }

    #[test]
    fn test_responsible_label_fallbacks() {
        let pending = instance(1, "Ana", "2011", None, DueDateState::Pending);
        assert_eq!(pending.responsible_label(), "No asignado");
        let finalized = instance(2, "Ana", "2011", None, DueDateState::Finalized);
        assert_eq!(finalized.responsible_label(), "No Asignado");
    }
}
