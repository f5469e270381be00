use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use forum_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) if e.is_not_found() => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::Core(e @ CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Core(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::ServiceUnavailable(reason) => {
                (StatusCode::SERVICE_UNAVAILABLE, reason.clone())
            }
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        self.log(status);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by HTML page handlers; renders an error page instead of JSON.
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        PageError(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(ApiError::Core(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, msg) = self.0.status_and_message();
        self.0.log(status);
        (status, Html(views::error_page(status, &msg))).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::errors::{DatabaseError, ValidationError};
    use forum_core::posts::PostError;

    #[test]
    fn maps_core_errors_to_status_codes() {
        let cases = [
            (
                ApiError::Core(CoreError::Post(PostError::NotFound(1))),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Core(CoreError::Validation(ValidationError::MissingField(
                    "content".to_string(),
                ))),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Core(CoreError::Database(DatabaseError::QueryFailed(
                    "locked".to_string(),
                ))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::BadRequest("bad id".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::ServiceUnavailable("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn page_error_keeps_status() {
        let response = PageError::from(CoreError::Post(PostError::NotFound(9))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
