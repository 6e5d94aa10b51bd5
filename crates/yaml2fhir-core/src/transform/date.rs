//! Date and timestamp normalization

use super::TransformError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Render a date or date-time as a FHIR instant
///
/// `2018-10-10` becomes `2018-10-10T00:00:00.000Z`. Date-times with an
/// offset are shifted to UTC; date-times without one are read as UTC.
pub fn to_instant(value: &str) -> Result<String, TransformError> {
    let trimmed = value.trim();
    let instant =
        parse_utc(trimmed).ok_or_else(|| TransformError::InvalidDate(trimmed.to_string()))?;
    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Normalize a FHIR dateTime
///
/// Partial dates (`2018`, `2018-10`, `2018-10-10`) are valid dateTimes and
/// are kept as written; anything with a time part is rendered as an instant.
pub fn to_date_time(value: &str) -> Result<String, TransformError> {
    let trimmed = value.trim();
    if is_partial_date(trimmed) {
        return Ok(trimmed.to_string());
    }
    to_instant(trimmed)
}

fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

fn is_partial_date(value: &str) -> bool {
    match value.len() {
        4 => value.bytes().all(|b| b.is_ascii_digit()),
        7 => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok(),
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_instant() {
        assert_eq!(to_instant("2018-10-10").unwrap(), "2018-10-10T00:00:00.000Z");
    }

    #[test]
    fn test_offset_date_time_shifted_to_utc() {
        assert_eq!(
            to_instant("2018-10-10T08:30:00-04:00").unwrap(),
            "2018-10-10T12:30:00.000Z"
        );
        assert_eq!(
            to_instant("2018-10-10T08:30:00.25Z").unwrap(),
            "2018-10-10T08:30:00.250Z"
        );
    }

    #[test]
    fn test_local_date_time_read_as_utc() {
        assert_eq!(
            to_instant("2018-10-10T08:30:00").unwrap(),
            "2018-10-10T08:30:00.000Z"
        );
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            to_instant("yesterday"),
            Err(TransformError::InvalidDate(_))
        ));
        assert!(to_instant("2018-13-40").is_err());
    }

    #[test]
    fn test_date_time_keeps_partial_dates() {
        assert_eq!(to_date_time("2018").unwrap(), "2018");
        assert_eq!(to_date_time("2018-10").unwrap(), "2018-10");
        assert_eq!(to_date_time("2018-10-10").unwrap(), "2018-10-10");
        assert_eq!(
            to_date_time("2018-10-10T05:00:00+01:00").unwrap(),
            "2018-10-10T04:00:00.000Z"
        );
        assert!(to_date_time("2018-1").is_err());
    }
}
