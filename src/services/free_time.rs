//! Interval arithmetic over a day's working window and its occupied slots.
//!
//! Everything here is pure: inputs are borrowed immutably and every result is
//! a freshly built value, so the functions are safe to call from any number
//! of concurrent requests.
//!
//! Slots are trusted to belong to the day they are checked against and to lie
//! within its bounds. Nothing is clipped or re-filtered here; resolving the
//! day and its slots is the caller's job.

use chrono::Duration;

use crate::models::{Day, EarliestFit, Interval, OverlapReport, Schedule, Slot};

/// Computes the maximal free windows of `day` left over by `slots`.
///
/// Slots may arrive in any order and may overlap or nest inside each other.
/// The result is ordered, disjoint and never contains an empty interval; it is
/// empty only when the slots cover the whole day.
pub fn compute_free_intervals(day: &Day, slots: &[Slot]) -> Vec<Interval> {
    if slots.is_empty() {
        return vec![day.bounds()];
    }

    // Sort references so the caller's slice keeps its order
    let mut sorted: Vec<&Slot> = slots.iter().collect();
    sorted.sort_by_key(|slot| slot.start());

    let mut free = Vec::new();
    let mut cursor = day.open();
    for slot in sorted {
        if slot.start() > cursor {
            free.push(Interval::spanning(cursor, slot.start()));
        }
        // Never move back: a slot nested in an earlier one must not reopen a gap
        cursor = cursor.max(slot.end());
    }

    if cursor < day.close() {
        free.push(Interval::spanning(cursor, day.close()));
    }

    free
}

/// Reports which of `slots` overlap `target`, keeping their input order.
pub fn check_overlap(target: &Interval, slots: &[Slot]) -> OverlapReport {
    let overlaps: Vec<Slot> = slots
        .iter()
        .filter(|slot| target.overlaps(&slot.span()))
        .copied()
        .collect();

    OverlapReport {
        is_free: overlaps.is_empty(),
        overlaps,
    }
}

/// Finds the first free window of at least `duration_minutes`.
///
/// Days are scanned by ascending date and, within a day, free windows in
/// chronological order. The returned window starts where the matching free
/// interval starts and lasts exactly `duration_minutes`.
pub fn find_earliest_fit(schedule: &Schedule, duration_minutes: u32) -> Option<EarliestFit> {
    let wanted = i64::from(duration_minutes);

    schedule.days().find_map(|day| {
        compute_free_intervals(day, &schedule.slots_for(day))
            .into_iter()
            .find(|interval| interval.duration() >= wanted)
            .map(|interval| EarliestFit {
                date: day.date(),
                start: interval.start(),
                end: interval.start() + Duration::minutes(wanted),
            })
    })
}
