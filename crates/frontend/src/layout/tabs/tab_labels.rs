//! Tab titles, keyed by tab key.

pub const OBLIGATION_DETAIL_PREFIX: &str = "a001_obligation_detail_";

/// Title of a fixed (non-detail) tab. Empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Operativo ─────────────────────────────────────────────────────
        "a001_obligation" => "Obligaciones",
        "a001_obligation_new" => "Crear Nueva Obligación",

        // ── Clientes ──────────────────────────────────────────────────────
        "a003_assign_obligations" => "Asignar Obligaciones",
        "a003_assign_responsible" => "Asignar Responsable",
        "a004_due_date_assignment" => "Listado de Asignaciones",

        // ── Notificaciones ────────────────────────────────────────────────
        "sys_upcoming" => "Asignaciones Próximas a Vencer",

        _ => "",
    }
}

/// «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn obligation_detail_key(id: i64) -> String {
    format!("{OBLIGATION_DETAIL_PREFIX}{id}")
}

/// Title for any tab key, including detail tabs. `None` for unknown keys.
pub fn title_for_key(key: &str) -> Option<String> {
    if let Some(id) = key.strip_prefix(OBLIGATION_DETAIL_PREFIX) {
        return id
            .parse::<i64>()
            .ok()
            .map(|id| detail_tab_label("Obligación", &id.to_string()));
    }
    let label = tab_label_for_key(key);
    (!label.is_empty()).then(|| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_labels() {
        assert_eq!(tab_label_for_key("a001_obligation"), "Obligaciones");
        assert_eq!(tab_label_for_key("sys_upcoming"), "Asignaciones Próximas a Vencer");
        assert_eq!(tab_label_for_key("d400_monthly_summary"), "");
    }

    #[test]
    fn test_detail_key_round_trip() {
        let key = obligation_detail_key(42);
        assert_eq!(key, "a001_obligation_detail_42");
        assert_eq!(title_for_key(&key).as_deref(), Some("Obligación · 42"));
    }

    #[test]
    fn test_unknown_keys_have_no_title() {
        assert_eq!(title_for_key("a001_obligation_detail_abc"), None);
        assert_eq!(title_for_key("whatever"), None);
        assert_eq!(
            title_for_key("a004_due_date_assignment").as_deref(),
            Some("Listado de Asignaciones")
        );
    }
}
