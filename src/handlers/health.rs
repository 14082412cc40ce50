use axum::{response::IntoResponse, Extension};
use hyper::StatusCode;

use crate::{app_state::AppState, errors::ApiError};

/// GET /health
/// Liveness probe: answers OK only when a database round-trip succeeds.
pub async fn health_check(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match database_ping(&state).await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        }
    }
}

async fn database_ping(state: &AppState) -> Result<(), ApiError> {
    let client = state.db.get().await?;
    client.query_one("SELECT 1", &[]).await?;
    Ok(())
}
