use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant becomes a JSON body; nothing reaches the client as a bare 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// One message per violated rule, surfaced verbatim.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The request could not be read: bad JSON, wrong content type, unknown path segment.
    #[error("Invalid request: {message}")]
    BadRequest { status: StatusCode, message: String },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Please fix the following issues before generating".to_string(),
                Some(messages.clone()),
            ),
            AppError::BadRequest { status, message } => {
                (*status, "INVALID_REQUEST", message.clone(), None)
            }
            AppError::Render(RenderError::Worker(e)) => {
                tracing::error!("Render worker failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "PDF rendering did not complete".to_string(),
                    None,
                )
            }
            AppError::Render(e) => {
                tracing::warn!("Render error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "RENDER_ERROR",
                    e.to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("An internal server error occurred: {e}"),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_every_message() {
        let response = AppError::Validation(vec![
            "Full Name is required.".to_string(),
            "Skills are required.".to_string(),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["details"],
            json!(["Full Name is required.", "Skills are required."])
        );
    }

    #[tokio::test]
    async fn test_render_error_carries_diagnostic() {
        let response = AppError::from(RenderError::UnsupportedCharacter {
            character: '❌',
            line: 1,
            column: 1,
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "RENDER_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("line 1"));
        assert!(body["error"].get("details").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_keeps_status() {
        let response = AppError::BadRequest {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        assert!(body["error"]["message"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_render_worker_failure_is_internal() {
        let join_error = tokio::spawn(async { panic!("render worker crashed") })
            .await
            .unwrap_err();
        let response = AppError::from(RenderError::from(join_error)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_internal_error_is_json() {
        let response = AppError::from(anyhow::anyhow!("worker panicked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("worker panicked"));
    }
}
