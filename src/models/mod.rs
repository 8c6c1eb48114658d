pub mod common;
pub mod interval;
pub mod schedule;
pub mod time;

pub use interval::{EarliestFit, FreeIntervalInSchedule, Interval, OverlapReport};
pub use schedule::{Day, Schedule, Slot, UpstreamSchedule};
