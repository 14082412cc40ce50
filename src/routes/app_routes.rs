// routes/app_routes.rs

use axum::{routing::get, Extension, Router};
use deadpool_postgres::Pool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::health::health_check;
use crate::handlers::message_handlers::{
    create_message, delete_message, get_message, list_messages, update_message,
};

/// Builds the routing table once at startup. PUT and PATCH share the
/// update handler; both apply partial semantics.
pub fn create_router(db: Arc<Pool>) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/messages", get(list_messages).post(create_message))
        .route(
            "/api/messages/:id",
            get(get_message)
                .put(update_message)
                .patch(update_message)
                .delete(delete_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
