use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Rejection raised while building a schedule entity from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date must be in YYYY-MM-DD format, got {0:?}")]
    InvalidDate(String),

    #[error("Time must be in HH:MM format, got {0:?}")]
    InvalidTime(String),

    #[error("End time must be after start time ({start} >= {end})")]
    NotChronological { start: NaiveTime, end: NaiveTime },

    #[error("Interval duration must be at least 0 minutes, got {0}")]
    NegativeDuration(i64),
}

/// Failure while fetching the schedule from upstream.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to fetch schedule: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to fetch schedule: upstream responded with status {0}")]
    UnexpectedStatus(u16),
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Day not found in schedule")]
    DayNotFound(NaiveDate),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// Request body or query string could not be extracted.
    #[error("{0}")]
    Rejection(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejection(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejection(rejection.body_text())
    }
}

// Body shape shared by every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DayNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Rejection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::DayNotFound(date) => warn!("No day for date {} in schedule", date),
            AppError::Validation(err) => warn!("Rejected request: {}", err),
            AppError::Rejection(reason) => warn!("Malformed request: {}", reason),
            AppError::Upstream(err) => error!("Upstream schedule unavailable: {}", err),
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
