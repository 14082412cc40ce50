// app_state.rs

use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool wrapped in Arc for thread-safe sharing
    pub db: Arc<Pool>,
}

impl AppState {
    pub fn new(db: Arc<Pool>) -> Self {
        Self { db }
    }
}
