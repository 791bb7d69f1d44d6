use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::domain::errors::PlannerError;
use shared::ErrorResponse;

impl PlannerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::NotFound { .. } => StatusCode::NOT_FOUND,
            PlannerError::Unauthenticated => StatusCode::UNAUTHORIZED,
            PlannerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Storage details stay in the log, not in the response body
        let message = match &self {
            PlannerError::Storage(e) => {
                error!("Storage failure: {:#}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = PlannerError::not_found("ghost").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.error, "No user with the username \"ghost\" exists");
    }

    #[tokio::test]
    async fn test_storage_error_hides_details() {
        let response = PlannerError::Storage(anyhow::anyhow!("/secret/path unreadable")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "STORAGE_ERROR");
        assert!(!error.error.contains("secret"));
    }
}
