//! Boundary error translation.
//!
//! Handlers return `Result<_, ApiError>`; this is the only place that decides
//! which status code and body an internal failure becomes.  Malformed request
//! bodies never reach here: axum's `Json` extractor rejects them with its own
//! 4xx response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

use crate::application::ServiceError;
use crate::domain::ErrorResponse;

/// Prefix of every 500 response message.
const INTERNAL_ERROR_PREFIX: &str = "Internal Server Error";

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A cursor service operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The task running the action panicked or was aborted.
    #[error("cursor action failed: {0}")]
    Task(#[from] JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("an error occurred: {self}");
        internal_error_response(&self.to_string())
    }
}

/// Builds the `500 {"message": "Internal Server Error: <details>"}` response.
///
/// The details string is sent to the client verbatim.
pub fn internal_error_response(details: &str) -> Response {
    let body = ErrorResponse {
        message: format!("{INTERNAL_ERROR_PREFIX}: {details}"),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StateError;
    use cursor_core::CursorPosition;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_service_error_becomes_500_with_message() {
        // Arrange
        let err = ApiError::from(ServiceError::State(StateError::OutOfBounds {
            position: CursorPosition::new(-50.0, 0.0),
            width: 1850.0,
            height: 925.0,
        }));

        // Act
        let response = err.into_response();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body.message,
            "Internal Server Error: position (-50, 0) is outside the 1850x925 canvas"
        );
    }

    #[tokio::test]
    async fn test_panicked_action_task_becomes_500() {
        let join_err = tokio::spawn(async { panic!("gate poisoned") })
            .await
            .unwrap_err();

        let response = ApiError::from(join_err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body
            .message
            .starts_with("Internal Server Error: cursor action failed"));
    }
}
