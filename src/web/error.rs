// JSON error responses.
//
// Every error leaves the API as {"error", "detail", "error_code"}. Internal
// failures are logged where they happen and reach the client as a generic
// message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::analysis::ValidationError;

#[derive(Debug)]
pub enum ApiError {
    /// Bad request body, path or parameters (422)
    Validation(String),
    /// No live record with that id; the resource name drives the error code (404)
    NotFound(&'static str),
    /// Anything the client can't fix (500)
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(detail) => {
                api_error(status, "Validation Error", &detail, "VALIDATION_ERROR")
            }
            ApiError::NotFound(resource) => api_error(
                status,
                "Not Found",
                &format!("{resource} not found"),
                &format!("{}_NOT_FOUND", resource.to_uppercase()),
            ),
            ApiError::Internal => api_error(
                status,
                "Internal Server Error",
                "An internal server error occurred",
                "INTERNAL_ERROR",
            ),
        }
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, error: &str, detail: &str, error_code: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "detail": detail,
            "error_code": error_code,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound("Analysis").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_converts_with_message() {
        let api: ApiError = ValidationError::EmptyText(2).into();
        match api {
            ApiError::Validation(detail) => assert!(detail.contains("index 2")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
