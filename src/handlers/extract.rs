//! Extractors whose rejections go through `AppError`, so malformed bodies and
//! query strings get the same `{"detail": ...}` 422 response as other
//! validation failures.

use axum::extract::{FromRequest, FromRequestParts, Json, Query};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
