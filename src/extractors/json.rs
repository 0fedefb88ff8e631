use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;

use crate::error::{AppError, JSON_CONTENT_TYPE, MALFORMED_JSON};

/// `axum::Json` with rejections reported as plain-text validation errors.
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(err) => AppError::validation(err.body_text()),
                JsonRejection::JsonSyntaxError(_) => AppError::validation(MALFORMED_JSON),
                JsonRejection::MissingJsonContentType(_) => AppError::validation(JSON_CONTENT_TYPE),
                other => AppError::validation(other.body_text()),
            }),
        }
    }
}
