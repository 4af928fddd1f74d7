//! Case-insensitive text matching shared by the pickers and list filters.

/// `haystack` contains `needle`, ignoring case. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Like [`contains_ci`] for an optional field: a missing value only matches an empty needle.
pub fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(h) => contains_ci(h, needle),
        None => needle.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Estudio Pérez SRL", "pérez"));
        assert!(contains_ci("IVA Mensual", ""));
        assert!(!contains_ci("IVA Mensual", "ganancias"));
    }

    #[test]
    fn test_opt_contains_ci() {
        assert!(opt_contains_ci(None, "  "));
        assert!(!opt_contains_ci(None, "ana"));
        assert!(opt_contains_ci(Some("Ana López"), "ANA"));
    }
}
