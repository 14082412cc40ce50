use axum::{debug_handler, extract::Path, response::IntoResponse, Extension, Json};
use hyper::StatusCode;

use crate::{
    app_state::AppState,
    errors::ApiResult,
    models::message::{CreateMessageRequest, UpdateMessageRequest},
    services::message_service,
};

/// GET /api/messages
pub async fn list_messages(Extension(state): Extension<AppState>) -> ApiResult<impl IntoResponse> {
    let messages = message_service::list_messages(state.db.clone()).await?;
    Ok(Json(messages))
}

/// POST /api/messages
#[debug_handler]
pub async fn create_message(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let message = message_service::create_message(state.db.clone(), payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages/:id
pub async fn get_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let message = message_service::get_message(state.db.clone(), id).await?;
    Ok(Json(message))
}

/// PUT/PATCH /api/messages/:id
#[debug_handler]
pub async fn update_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let message = message_service::update_message(state.db.clone(), id, payload).await?;
    Ok(Json(message))
}

/// DELETE /api/messages/:id
pub async fn delete_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    message_service::delete_message(state.db.clone(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
