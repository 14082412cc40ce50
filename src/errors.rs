// errors.rs

use axum::{response::IntoResponse, Json};
use hyper::StatusCode;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the message API.
///
/// Client-caused failures (validation, unknown id) carry detail back to the
/// caller; persistence failures are logged and answered with an opaque 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("message {0} not found")]
    NotFound(i64),

    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("database pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Pool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::NotFound(id) => json!({ "error": format!("Message {} not found", id) }),
            ApiError::Validation(errors) => json!({ "errors": errors }),
            // Persistence details stay server-side.
            ApiError::Database(_) | ApiError::Pool(_) => {
                tracing::error!(error = %self, "database failure");
                json!({ "error": "Database error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(max = 3))]
        name: String,
    }

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(ApiError::NotFound(7).status_code(), StatusCode::NOT_FOUND);

        let errors = Probe {
            name: "too long".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            ApiError::Validation(errors).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn not_found_response_names_the_id() {
        let response = ApiError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Message 42 not found");
    }

    #[tokio::test]
    async fn validation_response_carries_field_detail() {
        let errors = Probe {
            name: "too long".to_string(),
        }
        .validate()
        .unwrap_err();
        let response = ApiError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["errors"]["name"].is_array());
    }
}
