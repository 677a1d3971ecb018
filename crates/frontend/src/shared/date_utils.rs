//! Utilities for date and time formatting
//!
//! Display format is DD.MM.YYYY (HH:MM:SS); unparseable input is shown as-is.
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use contracts::enums::duration_unit::DurationUnit;

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_timestamp(datetime_str) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    match parse_timestamp(date_str) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => date_str.to_string(),
    }
}

pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str.map(format_date).unwrap_or_else(|| "—".to_string())
}

pub fn format_optional_datetime(datetime_str: Option<&str>) -> String {
    datetime_str.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Parse RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and plain dates.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `start + amount * unit`. Weeks are 7 days; months are calendar months.
pub fn add_duration(start: DateTime<Utc>, amount: u32, unit: DurationUnit) -> Option<DateTime<Utc>> {
    match unit {
        DurationUnit::Days => start.checked_add_signed(Duration::days(i64::from(amount))),
        DurationUnit::Weeks => start.checked_add_signed(Duration::weeks(i64::from(amount))),
        DurationUnit::Months => start.checked_add_months(Months::new(amount)),
    }
}

/// Expiry of an ad created at `created_at`, if the timestamp parses.
pub fn ad_expiry(created_at: Option<&str>, amount: u32, unit: DurationUnit) -> Option<DateTime<Utc>> {
    created_at
        .and_then(parse_timestamp)
        .and_then(|start| add_duration(start, amount, unit))
}

pub fn is_expired(expiry: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expiry < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59:59");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31.12.2024 23:59:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn test_format_optional_datetime() {
        assert_eq!(format_optional_datetime(Some("2024-05-02T08:30:00Z")), "02.05.2024 08:30:00");
        assert_eq!(format_optional_datetime(None), "—");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_add_duration_units() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        assert_eq!(
            add_duration(start, 3, DurationUnit::Days),
            Some(Utc.with_ymd_and_hms(2024, 2, 3, 12, 0, 0).unwrap())
        );
        assert_eq!(
            add_duration(start, 2, DurationUnit::Weeks),
            Some(Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap())
        );
        // Clamped to the last day of February
        assert_eq!(
            add_duration(start, 1, DurationUnit::Months),
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_ad_expiry() {
        let expiry = ad_expiry(Some("2024-05-01T00:00:00Z"), 10, DurationUnit::Days).unwrap();
        assert_eq!(expiry, Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap());
        assert!(is_expired(expiry, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
        assert!(!is_expired(expiry, Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()));
        assert_eq!(ad_expiry(None, 10, DurationUnit::Days), None);
        assert_eq!(ad_expiry(Some("demain"), 10, DurationUnit::Days), None);
    }
}
