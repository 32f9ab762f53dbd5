use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::Recommendation;
use crate::services::event_matcher::RecommendationContext;
use crate::services::recommendation_service;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    /// One id, or two joined by a comma
    pub user_ids: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

pub async fn recommendations_handler(
    State(pool): State<SqlitePool>,
    State(recommender): State<Arc<RecommendationContext>>,
    query: Result<Query<RecommendationsQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationsResponse>> {
    let Query(query) = query?;
    let recommendations =
        recommendation_service::recommend_for_users(&pool, &recommender, query.user_ids.as_deref())
            .await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}
