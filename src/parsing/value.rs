use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::core::types::Value;

/// Naive datetime layouts accepted in addition to RFC 3339, interpreted as UTC
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// Parse a single field as a number, or failing that as a timestamp
///
/// Only finite numbers are accepted.
///
/// # Examples
///
/// ```
/// use sciutil::parsing::value::parse_value;
/// use sciutil::ValueKind;
///
/// assert_eq!(parse_value("2.5").unwrap().kind(), ValueKind::Numeric);
/// assert_eq!(parse_value("2019-04-07 01:06:34").unwrap().kind(), ValueKind::Timestamp);
/// assert!(parse_value("station").is_none());
/// assert!(parse_value("NaN").is_none());
/// ```
#[must_use]
pub fn parse_value(field: &str) -> Option<Value> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    if let Ok(v) = field.parse::<f64>() {
        // `nan`, `inf` and `infinity` are words here, not data
        return v.is_finite().then_some(Value::Numeric(v));
    }
    parse_datetime(field).map(Value::Timestamp)
}

/// Parse a timestamp: RFC 3339 with offset, a naive date-time (taken as UTC),
/// or a bare date (midnight UTC)
#[must_use]
pub fn parse_datetime(field: &str) -> Option<DateTime<Utc>> {
    let field = field.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(field) {
        return Some(t.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(field, format) {
            return Some(t.and_utc());
        }
    }

    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_value(" 42 "), Some(Value::Numeric(42.0)));
        assert_eq!(parse_value("-1.5e3"), Some(Value::Numeric(-1500.0)));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = Utc.with_ymd_and_hms(2019, 4, 7, 1, 6, 34).unwrap();

        assert_eq!(parse_datetime("2019-04-07T01:06:34Z"), Some(expected));
        assert_eq!(parse_datetime("2019-04-07T03:06:34+02:00"), Some(expected));
        assert_eq!(parse_datetime("2019-04-07 01:06:34"), Some(expected));
        assert_eq!(parse_datetime("2019-04-07T01:06:34"), Some(expected));
        assert_eq!(parse_datetime("2019/04/07 01:06:34"), Some(expected));
        assert_eq!(
            parse_datetime("2019-04-07 01:06:34.250"),
            Some(expected + TimeDelta::milliseconds(250))
        );
        assert_eq!(
            parse_datetime("2019-04-07"),
            Some(Utc.with_ymd_and_hms(2019, 4, 7, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_datetime("07/04/2019"), None);
    }

    #[test]
    fn test_parse_non_finite_rejected() {
        for word in ["nan", "NaN", "inf", "-inf", "Infinity", "+infinity"] {
            assert_eq!(parse_value(word), None, "{word}");
        }
        assert_eq!(parse_value("1e308"), Some(Value::Numeric(1e308)));
        assert_eq!(parse_value("1e309"), None);
    }

    #[test]
    fn test_parse_value_timestamp() {
        let value = parse_value("2019-04-07").unwrap();
        assert!(value.as_timestamp().is_some());
    }
}
