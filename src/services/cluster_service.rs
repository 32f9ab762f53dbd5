use sqlx::SqlitePool;
use tracing::debug;

use crate::database::{chat_repo, user_repo};
use crate::error::{AppError, AppResult};
use crate::models::Cluster;

/// Ids of users in the requester's cluster who have no pending or accepted chat with them.
///
/// Order follows the store's cluster scan.
pub async fn find_peers(pool: &SqlitePool, user_id: &str) -> AppResult<Vec<String>> {
    let Some(row) = user_repo::load_user(pool, user_id).await? else {
        return Err(AppError::not_found("User not found"));
    };
    // Only the cluster is needed here; hobbies are not parsed.
    let Cluster::Assigned(cluster) = Cluster::from(row.cluster) else {
        return Err(AppError::invalid_input("User has no cluster assigned yet"));
    };

    let candidates = user_repo::list_users_in_cluster(pool, &cluster).await?;

    let mut peers = Vec::new();
    for candidate in candidates {
        if candidate.user_id == row.user_id {
            continue;
        }
        if has_open_chat(pool, &row.user_id, &candidate.user_id).await? {
            debug!(user_id, peer = %candidate.user_id, "skipping connected peer");
            continue;
        }
        peers.push(candidate.user_id);
    }

    Ok(peers)
}

/// True if a pending or accepted chat exists under either key ordering.
pub async fn has_open_chat(pool: &SqlitePool, user_a: &str, user_b: &str) -> AppResult<bool> {
    let chats = chat_repo::load_chats_between(pool, user_a, user_b).await?;
    Ok(chats.iter().any(|chat| chat.status().is_open()))
}
