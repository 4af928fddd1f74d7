//! Calendar dates as the backend sends them.
//!
//! Dates arrive as `"YYYY-MM-DD"`, sometimes with a time part appended
//! (`"2025-03-18T00:00:00"`). Only the calendar day matters here.

use chrono::NaiveDate;

pub const NO_DATE: &str = "Sin Fecha";

/// Parses the leading `YYYY-MM-DD` of a backend date.
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

/// dd/MM/yyyy, or "Sin Fecha".
pub fn format_dmy(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// Serde adapter for optional backend dates. Null, missing and empty all mean no date.
pub mod optional_date {
    use super::parse_backend_date;
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_backend_date(s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 18);
        assert_eq!(parse_backend_date("2025-03-18"), expected);
        assert_eq!(parse_backend_date("2025-03-18T00:00:00"), expected);
        assert_eq!(parse_backend_date("18/03/2025"), None);
    }

    #[test]
    fn test_format_dmy() {
        assert_eq!(format_dmy(NaiveDate::from_ymd_opt(2025, 1, 5)), "05/01/2025");
        assert_eq!(format_dmy(None), "Sin Fecha");
    }
}
