//! Wire formats for calendar dates and wall-clock times.
//!
//! Times carry minute granularity and no timezone; both are parsed from and
//! written back to the same textual forms the upstream schedule uses.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(value.to_string()))
}

/// Serializes a `NaiveTime` as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(super::TIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30"), Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
        assert_eq!(parse_time("23:59"), Ok(NaiveTime::from_hms_opt(23, 59, 0).unwrap()));
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        for bad in ["25:00", "12:60", "noon", "", "09:00:00"] {
            assert_eq!(
                parse_time(bad),
                Err(ValidationError::InvalidTime(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15"), Ok(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(matches!(parse_date("15.01.2024"), Err(ValidationError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(ValidationError::InvalidDate(_))));
        assert!(matches!(parse_date("invalid-date"), Err(ValidationError::InvalidDate(_))));
    }
}
