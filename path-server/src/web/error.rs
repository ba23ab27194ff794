//! Error responses.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::ScheduleError;

/// Prefix on every error body so the watch can tell errors from answers.
pub const ERROR_PREFIX: &str = "error: ";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        let message = e.to_string();
        match e {
            ScheduleError::InvalidLimit(_) | ScheduleError::InvalidTimeToken(_) => {
                AppError::BadRequest { message }
            }
            ScheduleError::DirectionUnknown(_)
            | ScheduleError::UnknownStation(_)
            | ScheduleError::NoUpcomingTime { .. }
            | ScheduleError::StationHasNoSchedule(_) => AppError::NotFound { message },
            ScheduleError::FetchFailed { .. }
            | ScheduleError::ScheduleNotFound
            | ScheduleError::MalformedSchedule(_) => AppError::Internal { message },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        (status, format!("{ERROR_PREFIX}{message}")).into_response()
    }
}
