//! Loading of the holiday list bundled with the executable.

use crate::calendar::HolidaySet;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

const HOLIDAYS_JSON: &str = include_str!("../data/holidays.json");

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize, Debug)]
struct HolidayList {
    holidays: Vec<String>,
}

/// Holidays compiled into the binary from `data/holidays.json`.
pub fn embedded() -> Result<HolidaySet> {
    from_document(HOLIDAYS_JSON)
}

/// Parse a `{"holidays": ["YYYY-MM-DD", ...]}` document.
pub fn from_document(text: &str) -> Result<HolidaySet> {
    if text.trim().is_empty() {
        return Err(Error::ConfigMissing);
    }
    let list: HolidayList =
        serde_json::from_str(text).map_err(|e| Error::MalformedDocument(e.to_string()))?;
    list.holidays.iter().map(|entry| parse_date(entry)).collect()
}

/// Strict `YYYY-MM-DD`: zero-padded fields and a date that exists.
pub fn parse_date(entry: &str) -> Result<NaiveDate> {
    let well_formed = entry.len() == 10
        && entry.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(Error::InvalidHolidayDate(entry.to_string()));
    }
    NaiveDate::parse_from_str(entry, DATE_FORMAT)
        .map_err(|_| Error::InvalidHolidayDate(entry.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_document_loads() {
        let holidays = embedded().unwrap();
        assert!(!holidays.is_empty());
        assert!(holidays.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }

    #[test]
    fn keeps_document_order() {
        let holidays =
            from_document(r#"{"holidays": ["2025-05-05", "2025-01-01", "2025-05-05"]}"#).unwrap();
        let dates: Vec<String> = holidays.iter().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2025-05-05", "2025-01-01", "2025-05-05"]);
    }

    #[test]
    fn empty_list_is_valid() {
        let holidays = from_document(r#"{"holidays": []}"#).unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn empty_document_is_missing() {
        assert_eq!(from_document(""), Err(Error::ConfigMissing));
        assert_eq!(from_document(" \n\t"), Err(Error::ConfigMissing));
    }

    #[test]
    fn invalid_month_is_rejected() {
        let err = from_document(r#"{"holidays": ["2025-01-01", "2025-13-01"]}"#).unwrap_err();
        assert_eq!(err, Error::InvalidHolidayDate("2025-13-01".to_string()));
        assert!(err.is_config_parse());
    }

    #[test]
    fn malformed_entries_are_rejected() {
        for entry in [
            "2025-02-30",
            "2025-1-05",
            "2025/01/05",
            "20250105",
            "",
            "2025-01-05 ",
            " 2025-1-01",
            "2025- 1-01",
            "2025-01- 1",
            "+2025-1-01",
            "2025-1-1  ",
        ] {
            assert_eq!(
                parse_date(entry),
                Err(Error::InvalidHolidayDate(entry.to_string())),
                "{entry:?}"
            );
        }
    }

    #[test]
    fn malformed_documents_are_rejected() {
        for text in [
            "holidays: [2025-01-01]",
            r#"{"days": ["2025-01-01"]}"#,
            r#"{"holidays": "2025-01-01"}"#,
            r#"{"holidays": [20250101]}"#,
        ] {
            let err = from_document(text).unwrap_err();
            assert!(matches!(err, Error::MalformedDocument(_)), "{text}");
            assert!(err.is_config_parse());
        }
    }
}
