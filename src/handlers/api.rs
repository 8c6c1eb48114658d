use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

use crate::client::ScheduleSource;
use crate::error::AppError;
use crate::handlers::extract::{JsonBody, QueryParams};
use crate::models::common::FindFreeParams;
use crate::models::time::parse_date;
use crate::models::{Day, FreeIntervalInSchedule, Interval, OverlapReport, Schedule, Slot};
use crate::services::free_time::{check_overlap, compute_free_intervals, find_earliest_fit};

// AppState struct containing shared resources
pub struct AppState {
    pub source: Arc<dyn ScheduleSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self { source }
    }
}

// Resolve the requested date against a freshly fetched schedule
async fn day_with_slots(state: &AppState, date: &str) -> Result<(Day, Vec<Slot>), AppError> {
    let date = parse_date(date)?;
    let schedule = state.source.fetch_schedule().await?;

    let day = *schedule.day(date).ok_or(AppError::DayNotFound(date))?;
    let slots = schedule.slots_for(&day);
    Ok((day, slots))
}

// Whole schedule endpoint
pub async fn get_schedule(State(state): State<Arc<AppState>>) -> Result<Json<Schedule>, AppError> {
    info!("Received request for the whole schedule");

    let schedule = state.source.fetch_schedule().await?;
    info!(
        "Returning schedule with {} days and {} time slots",
        schedule.days().count(),
        schedule.slots().len()
    );
    Ok(Json(schedule))
}

// Occupied slots for a date
pub async fn get_taken_slots(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Slot>>, AppError> {
    info!("Received request for taken slots on {}", date);

    let (day, slots) = day_with_slots(&state, &date).await?;
    info!("Day {} has {} taken slots", day.date(), slots.len());
    Ok(Json(slots))
}

// Free intervals for a date
pub async fn get_free_intervals(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Interval>>, AppError> {
    info!("Received request for free intervals on {}", date);

    let (day, slots) = day_with_slots(&state, &date).await?;
    let free = compute_free_intervals(&day, &slots);
    info!("Day {} has {} free intervals", day.date(), free.len());
    Ok(Json(free))
}

// Check whether an interval is free on a date
pub async fn check_interval_free(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    JsonBody(interval): JsonBody<Interval>,
) -> Result<Json<OverlapReport>, AppError> {
    info!(
        "Received request to check {}-{} on {}",
        interval.start(),
        interval.end(),
        date
    );

    let (day, slots) = day_with_slots(&state, &date).await?;
    let report = check_overlap(&interval, &slots);
    info!(
        "Interval {}-{} on {} is {} ({} overlapping slots)",
        interval.start(),
        interval.end(),
        day.date(),
        if report.is_free { "free" } else { "taken" },
        report.overlaps.len()
    );
    Ok(Json(report))
}

// Earliest window of the requested length across the whole schedule
pub async fn find_free_interval(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<FindFreeParams>,
) -> Result<Json<FreeIntervalInSchedule>, AppError> {
    info!(
        "Received request to find a free interval of {} minutes",
        params.interval_duration
    );

    let duration = params.duration_minutes()?;
    let schedule = state.source.fetch_schedule().await?;

    let fit = find_earliest_fit(&schedule, duration);
    match &fit {
        Some(fit) => info!(
            "Found free interval on {} at {}-{}",
            fit.date, fit.start, fit.end
        ),
        None => info!("No free interval of {} minutes in schedule", duration),
    }
    Ok(Json(FreeIntervalInSchedule::from(fit)))
}
