//! Renders `AppError` as the uniform response envelope.
//!
//! Domain outcomes all map to 400; the message text carries the
//! distinction. 401 is reserved for the token boundary, 5xx for
//! infrastructure faults, whose details never reach the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::Envelope;
use crate::error::AppError;

/// Maps an error variant to the status code it renders with.
pub fn error_status(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. }
        | AppError::Duplicate { .. }
        | AppError::Forbidden { .. }
        | AppError::Validation { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_status(&self);

        let message = match &self {
            AppError::ConnectionPool { .. } => {
                tracing::error!(error = ?self, "Connection pool failure");
                "Service temporarily unavailable".to_string()
            }
            AppError::Database { .. }
            | AppError::Configuration { .. }
            | AppError::Internal { .. } => {
                tracing::error!(error = ?self, "Request failed with an internal error");
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        Envelope::<()>::failure(status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_outcomes_render_as_bad_request() {
        for error in [
            AppError::not_found("board post", "id", 5),
            AppError::duplicate("user", "login_id", "alice"),
            AppError::forbidden("Only the author can modify this post."),
            AppError::Validation {
                field: "rating".to_string(),
                reason: "out of range".to_string(),
            },
            AppError::bad_request("nope"),
        ] {
            assert_eq!(error_status(&error), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unauthorized_renders_as_401() {
        assert_eq!(
            error_status(&AppError::unauthorized("missing token")),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn infrastructure_faults_render_as_5xx() {
        let database = AppError::Database {
            operation: "insert".to_string(),
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(error_status(&database), StatusCode::INTERNAL_SERVER_ERROR);

        let pool = AppError::ConnectionPool {
            source: anyhow::anyhow!("exhausted"),
        };
        assert_eq!(error_status(&pool), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn internal_error_message_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("connection string with password"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8_lossy(&bytes);
        assert!(!body.contains("password"));
        assert!(body.contains("An internal error occurred"));
    }

    #[tokio::test]
    async fn duplicate_body_carries_the_message() {
        let error = AppError::duplicate("user", "login_id", "alice");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "user with login_id 'alice' already exists");
        assert!(body["data"].is_null());
    }
}
