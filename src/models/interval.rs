use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::schedule::Slot;
use crate::models::time::{hhmm, parse_time};

/// Raw `{start, end}` pair as it appears in request bodies.
#[derive(Debug, Deserialize)]
pub struct RawInterval {
    pub start: String,
    pub end: String,
}

/// Half-open time window `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    #[serde(serialize_with = "hhmm::serialize")]
    start: NaiveTime,
    #[serde(serialize_with = "hhmm::serialize")]
    end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::NotChronological { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    // Callers must already hold `start < end`
    pub(crate) fn spanning(start: NaiveTime, end: NaiveTime) -> Self {
        debug_assert!(start < end, "empty interval {start}..{end}");
        Self { start, end }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length in whole minutes.
    pub fn duration(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Touching intervals (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl TryFrom<RawInterval> for Interval {
    type Error = ValidationError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::parse(&raw.start, &raw.end)
    }
}

/// Answer to "is this interval free on that day".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    pub is_free: bool,
    pub overlaps: Vec<Slot>,
}

/// First window in the schedule long enough for a requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarliestFit {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

// Response structure for the earliest-fit endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeIntervalInSchedule {
    pub found: bool,
    pub date: NaiveDate,
    #[serde(serialize_with = "hhmm::serialize")]
    pub start: NaiveTime,
    #[serde(serialize_with = "hhmm::serialize")]
    pub end: NaiveTime,
}

impl FreeIntervalInSchedule {
    /// Placeholder reported when nothing in the schedule fits.
    pub fn not_found() -> Self {
        Self {
            found: false,
            date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default(),
            start: NaiveTime::default(),
            end: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
        }
    }
}

impl From<Option<EarliestFit>> for FreeIntervalInSchedule {
    fn from(fit: Option<EarliestFit>) -> Self {
        match fit {
            Some(fit) => Self {
                found: true,
                date: fit.date,
                start: fit.start,
                end: fit.end,
            },
            None => Self::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_interval_parse() {
        let interval = Interval::parse("09:00", "10:00").unwrap();
        assert_eq!(interval.start(), t(9, 0));
        assert_eq!(interval.end(), t(10, 0));
    }

    #[test]
    fn test_interval_rejects_empty_and_reversed() {
        assert_eq!(
            Interval::parse("09:00", "09:00"),
            Err(ValidationError::NotChronological { start: t(9, 0), end: t(9, 0) })
        );
        assert!(matches!(
            Interval::parse("11:00", "10:00"),
            Err(ValidationError::NotChronological { .. })
        ));
        assert!(matches!(
            Interval::parse("25:00", "13:00"),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_duration() {
        assert_eq!(Interval::parse("09:00", "10:30").unwrap().duration(), 90);
        assert_eq!(Interval::parse("00:00", "23:59").unwrap().duration(), 1439);
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::parse("09:00", "11:00").unwrap();
        let b = Interval::parse("10:00", "12:00").unwrap();
        let c = Interval::parse("11:00", "12:00").unwrap();
        let d = Interval::parse("13:00", "14:00").unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c), "touching intervals must not overlap");
        assert!(!c.overlaps(&a));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_interval_json() {
        let interval: Interval =
            serde_json::from_str(r#"{"start": "10:30", "end": "11:30"}"#).unwrap();
        assert_eq!(interval, Interval::parse("10:30", "11:30").unwrap());
        assert_eq!(
            serde_json::to_value(interval).unwrap(),
            serde_json::json!({"start": "10:30", "end": "11:30"})
        );

        let err = serde_json::from_str::<Interval>(r#"{"start": "25:00", "end": "13:00"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn test_not_found_placeholder() {
        let value = serde_json::to_value(FreeIntervalInSchedule::from(None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "found": false,
                "date": "1900-01-01",
                "start": "00:00",
                "end": "23:59",
            })
        );
    }
}
