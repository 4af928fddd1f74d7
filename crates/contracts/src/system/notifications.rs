//! "Próximas a vencer": instances the backend considers upcoming or overdue.

use crate::domain::a004_due_date_assignment::DueDateState;
use crate::shared::dates::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Refresh period of the shared notification list.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub const LOAD_ERROR: &str = "Error al cargar las notificaciones.";

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingDueDateRef {
    #[serde(rename = "fechaVencimiento", with = "optional_date", default)]
    pub fecha_vencimiento: Option<NaiveDate>,
    #[serde(rename = "terminacionCuit", default)]
    pub terminacion_cuit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingClientRef {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(rename = "razonSocial", default)]
    pub razon_social: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingAssignmentRef {
    pub obligacion: NamedRef,
    #[serde(default)]
    pub cliente: Option<UpcomingClientRef>,
}

/// Row of `/api/asignaciones-vencimientos/proximas-a-vencer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingDueDate {
    #[serde(alias = "idAsignacionVencimiento")]
    pub id: i64,
    pub vencimiento: UpcomingDueDateRef,
    pub asignacion: UpcomingAssignmentRef,
    pub estado: DueDateState,
    #[serde(default)]
    pub observacion: Option<String>,
}

impl UpcomingDueDate {
    pub fn obligation_name(&self) -> &str {
        &self.asignacion.obligacion.nombre
    }

    pub fn client_name(&self) -> Option<&str> {
        let c = self.asignacion.cliente.as_ref()?;
        c.nombre.as_deref().or(c.razon_social.as_deref())
    }

    pub fn cuit_digit_label(&self) -> String {
        self.vencimiento
            .terminacion_cuit
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

// ============================================================================
// Feed state
// ============================================================================

/// Loading/error/items triple held by the shared store.
///
/// `finish` with data replaces the whole list. A failed refresh records the
/// error and leaves the previous list in place.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationFeed<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for NotificationFeed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> NotificationFeed<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish<E>(&mut self, result: Result<Vec<T>, E>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_ERROR.to_string()),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_is_five_minutes() {
        assert_eq!(POLL_INTERVAL.as_millis(), 300_000);
    }

    #[test]
    fn test_finish_replaces_items() {
        let mut feed = NotificationFeed::default();
        feed.begin();
        assert!(feed.loading);
        feed.finish::<()>(Ok(vec![1, 2, 3]));
        assert!(!feed.loading);
        assert_eq!(feed.count(), 3);

        feed.begin();
        feed.finish::<()>(Ok(vec![4]));
        assert_eq!(feed.items, vec![4]);
    }

    #[test]
    fn test_error_keeps_previous_items() {
        let mut feed = NotificationFeed {
            items: vec![1, 2],
            ..Default::default()
        };
        feed.begin();
        feed.finish(Err("HTTP 500"));
        assert_eq!(feed.items, vec![1, 2]);
        assert_eq!(feed.error.as_deref(), Some(LOAD_ERROR));

        feed.begin();
        assert_eq!(feed.error, None);
    }

    #[test]
    fn test_deserialize_upcoming() {
        let raw = r#"[{"id":3,"vencimiento":{"fechaVencimiento":"2025-07-20","terminacionCuit":4},
            "asignacion":{"obligacion":{"nombre":"IVA"},"cliente":{"nombre":null,"razonSocial":"Sol SRL"}},
            "estado":"PENDIENTE","observacion":null}]"#;
        let items: Vec<UpcomingDueDate> = serde_json::from_str(raw).unwrap();
        assert_eq!(items[0].obligation_name(), "IVA");
        assert_eq!(items[0].client_name(), Some("Sol SRL"));
        assert_eq!(items[0].cuit_digit_label(), "4");
    }
}
