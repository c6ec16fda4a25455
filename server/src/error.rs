//! HTTP error mapping for the controller.
//!
//! Handlers return `Result<_, ApiError>`; extractor rejections are converted
//! into `ApiError::BadRequest` so every client error leaves through this type.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::model::TodoId;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No todo with this id. Rendered as a bare 404 with an empty body.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The request could not be understood: empty or malformed body, or a
    /// path id that is not a number.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(id) => {
                tracing::debug!(id, "todo not found");
                status.into_response()
            }
            ApiError::BadRequest(message) => {
                tracing::warn!(%message, "rejected request");
                let body = ErrorBody {
                    code: "BAD_REQUEST",
                    message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid todo payload: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("empty body".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(ApiError::NotFound(3).to_string(), "todo 3 not found");
        assert_eq!(
            ApiError::BadRequest("empty body".to_string()).to_string(),
            "bad request: empty body"
        );
    }

    #[test]
    fn not_found_response_has_no_body_type() {
        let response = ApiError::NotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }

    #[test]
    fn serde_errors_become_bad_requests() {
        let err = serde_json::from_str::<crate::model::TodoPatch>("{").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }
}
