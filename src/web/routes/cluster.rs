use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::services::cluster_service;

#[derive(Debug, Serialize)]
pub struct SameClusterUsersResponse {
    pub user_ids: Vec<String>,
}

pub async fn same_cluster_users_handler(
    Path(user_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<SameClusterUsersResponse>> {
    let user_ids = cluster_service::find_peers(&pool, &user_id).await?;
    Ok(Json(SameClusterUsersResponse { user_ids }))
}
