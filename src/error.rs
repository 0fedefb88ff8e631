use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;
use tracing::error;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const MISSING_COURSE_ID: &str = "Course ID is required";
pub const INVALID_COURSE_ID: &str = "Invalid course ID";
pub const MALFORMED_JSON: &str = "Request body is not valid JSON";
pub const JSON_CONTENT_TYPE: &str = "Expected request with `Content-Type: application/json`";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Course not found")]
    NotFound,

    #[error("No courses found")]
    EmptyResult,

    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Wraps a driver error with the message prefix of the operation that failed.
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Storage { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::EmptyResult => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let AppError::Storage { .. } = &self {
            error!("database error: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_its_status() {
        assert_eq!(AppError::validation(MISSING_FIELDS).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EmptyResult.status_code(), StatusCode::NOT_FOUND);
        let err = AppError::storage("Error fetching courses")(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_message_keeps_driver_text() {
        let driver = sqlx::Error::Protocol("disk I/O error".to_string());
        let expected = format!("Error inserting course: {}", driver);
        let err = AppError::storage("Error inserting course")(driver);
        assert_eq!(err.to_string(), expected);
    }
}
