use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;
use crate::models::interval::Interval;
use crate::models::time::{hhmm, parse_date, parse_time};

// Wire shapes as published by the upstream schedule
#[derive(Debug, Deserialize)]
pub struct RawDay {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct RawSlot {
    pub id: i64,
    pub day_id: i64,
    pub start: String,
    pub end: String,
}

/// A working day with its opening and closing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDay")]
pub struct Day {
    id: i64,
    date: NaiveDate,
    #[serde(rename = "start", serialize_with = "hhmm::serialize")]
    open: NaiveTime,
    #[serde(rename = "end", serialize_with = "hhmm::serialize")]
    close: NaiveTime,
}

impl Day {
    pub fn new(
        id: i64,
        date: NaiveDate,
        open: NaiveTime,
        close: NaiveTime,
    ) -> Result<Self, ValidationError> {
        if close <= open {
            return Err(ValidationError::NotChronological {
                start: open,
                end: close,
            });
        }
        Ok(Self {
            id,
            date,
            open,
            close,
        })
    }

    /// Builds a day from its `YYYY-MM-DD` date and `HH:MM` bounds.
    pub fn parse(id: i64, date: &str, open: &str, close: &str) -> Result<Self, ValidationError> {
        Self::new(id, parse_date(date)?, parse_time(open)?, parse_time(close)?)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// The whole working window `[open, close)`.
    pub fn bounds(&self) -> Interval {
        Interval::spanning(self.open, self.close)
    }
}

impl TryFrom<RawDay> for Day {
    type Error = ValidationError;

    fn try_from(raw: RawDay) -> Result<Self, Self::Error> {
        Self::parse(raw.id, &raw.date, &raw.start, &raw.end)
    }
}

/// An occupied stretch of time on the day identified by `day_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    id: i64,
    day_id: i64,
    #[serde(serialize_with = "hhmm::serialize")]
    start: NaiveTime,
    #[serde(serialize_with = "hhmm::serialize")]
    end: NaiveTime,
}

impl Slot {
    pub fn new(
        id: i64,
        day_id: i64,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::NotChronological { start, end });
        }
        Ok(Self {
            id,
            day_id,
            start,
            end,
        })
    }

    pub fn parse(id: i64, day_id: i64, start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(id, day_id, parse_time(start)?, parse_time(end)?)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn day_id(&self) -> i64 {
        self.day_id
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn span(&self) -> Interval {
        Interval::spanning(self.start, self.end)
    }
}

impl TryFrom<RawSlot> for Slot {
    type Error = ValidationError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Self::parse(raw.id, raw.day_id, &raw.start, &raw.end)
    }
}

/// Payload returned by the upstream schedule endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamSchedule {
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub timeslots: Vec<Slot>,
}

/// Snapshot of the upstream schedule, days keyed by date.
///
/// Days iterate in ascending date order regardless of the order the upstream
/// listed them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Day>,
    #[serde(rename = "timeslots")]
    slots: Vec<Slot>,
}

impl Schedule {
    pub fn new(days: impl IntoIterator<Item = Day>, slots: Vec<Slot>) -> Self {
        let mut by_date = BTreeMap::new();
        for day in days {
            if let Some(previous) = by_date.insert(day.date(), day) {
                warn!(
                    "Schedule lists {} twice (day ids {} and {}), keeping the later one",
                    day.date(),
                    previous.id(),
                    day.id()
                );
            }
        }

        Self {
            days: by_date,
            slots,
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.days.values()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots belonging to `day`, in the order the upstream listed them.
    pub fn slots_for(&self, day: &Day) -> Vec<Slot> {
        self.slots
            .iter()
            .filter(|slot| slot.day_id() == day.id())
            .copied()
            .collect()
    }
}

impl From<UpstreamSchedule> for Schedule {
    fn from(upstream: UpstreamSchedule) -> Self {
        Self::new(upstream.days, upstream.timeslots)
    }
}
