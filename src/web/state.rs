use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::event_matcher::RecommendationContext;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub recommender: Arc<RecommendationContext>,
    pub public_url: String,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<RecommendationContext> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.recommender)
    }
}
