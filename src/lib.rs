//! Timetable Service
//!
//! A read-only query API over a schedule owned by an upstream service.
//! Every request fetches a fresh snapshot of days and occupied time slots
//! and answers from it: which slots are taken on a date, which stretches
//! of the working day are still free, whether a given interval is free,
//! and where the earliest window of a given length is.
//!
//! # Modules
//!
//! - `services::free_time`: free-interval, overlap and earliest-fit computations
//! - `models`: validated days, slots, intervals and the schedule snapshot
//! - `client`: `ScheduleClient` for the upstream schedule endpoint
//! - `handlers` / `routes`: the HTTP surface
//! - `config`: settings read from the environment
//!
//! All times are naive wall-clock times with minute granularity; intervals
//! are half-open, so touching intervals never overlap.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main API types for ease of use
pub use client::{ScheduleClient, ScheduleSource};
pub use config::Settings;
pub use handlers::api::AppState;
pub use routes::create_router;
