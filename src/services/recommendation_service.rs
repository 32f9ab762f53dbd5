use anyhow::Context;
use sqlx::SqlitePool;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use crate::database::user_repo;
use crate::error::{AppError, AppResult};
use crate::models::{Recommendation, UserProfile};
use crate::services::event_matcher::RecommendationContext;

pub const MAX_USERS_PER_REQUEST: usize = 2;

/// Splits the comma-joined `user_ids` parameter. Blank segments are dropped.
pub fn parse_user_ids(raw: Option<&str>) -> AppResult<Vec<String>> {
    let ids: Vec<String> = raw
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() || ids.len() > MAX_USERS_PER_REQUEST {
        return Err(AppError::invalid_input("You must provide 1 or 2 user IDs"));
    }
    Ok(ids)
}

pub async fn load_profiles(pool: &SqlitePool, user_ids: &[String]) -> AppResult<Vec<UserProfile>> {
    let mut profiles = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        let Some(row) = user_repo::load_user(pool, user_id).await? else {
            return Err(AppError::not_found(format!("User {} not found", user_id)));
        };
        profiles.push(UserProfile::try_from(row)?);
    }
    Ok(profiles)
}

/// Union of hobbies and lower-cased cities over all profiles.
pub fn merge_interests(profiles: &[UserProfile]) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut hobbies = BTreeSet::new();
    let mut cities = BTreeSet::new();
    for profile in profiles {
        hobbies.extend(profile.hobbies.iter().cloned());
        if let Some(city) = &profile.city {
            cities.insert(city.to_lowercase());
        }
    }
    (hobbies, cities)
}

/// Events for one user or a pair of users, ranked against their combined interests.
pub async fn recommend_for_users(
    pool: &SqlitePool,
    ctx: &Arc<RecommendationContext>,
    raw_user_ids: Option<&str>,
) -> AppResult<Vec<Recommendation>> {
    let user_ids = parse_user_ids(raw_user_ids)?;
    let profiles = load_profiles(pool, &user_ids).await?;
    let (hobbies, cities) = merge_interests(&profiles);
    debug!(
        users = ?user_ids,
        hobbies = hobbies.len(),
        cities = ?cities,
        "ranking events"
    );

    // Embedding is CPU-bound.
    let ctx = Arc::clone(ctx);
    tokio::task::spawn_blocking(move || ctx.recommend(&hobbies, &cities))
        .await
        .context("recommendation task failed")?
}
