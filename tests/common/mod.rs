#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use matchmaker::database::schema;
use matchmaker::embedding::{Embedding, TextEmbedder};
use matchmaker::models::EventRecord;
use matchmaker::services::event_catalog::EventCatalog;
use matchmaker::services::event_matcher::RecommendationContext;
use matchmaker::web::AppState;

/// Hashed bag-of-words; shared words raise the score.
///
/// Mirrors the crate's unit-test embedder, which is `#[cfg(test)]` and so not
/// visible to integration tests.
pub struct KeywordEmbedder;

impl TextEmbedder for KeywordEmbedder {
    fn embed(&self, text: &str) -> anyhow::Result<Embedding> {
        let mut v = vec![0.0f32; 1024];
        for word in text.split_whitespace() {
            let mut h = DefaultHasher::new();
            word.to_lowercase().hash(&mut h);
            v[(h.finish() as usize) % 1024] += 1.0;
        }
        Ok(Embedding::new(v))
    }
}

/// Single connection: every connection to `sqlite::memory:` is its own database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    schema::init_schema(&pool).await.expect("schema");
    pool
}

pub async fn insert_user(
    pool: &SqlitePool,
    user_id: &str,
    hobbies: &[&str],
    city: Option<&str>,
    cluster: Option<&str>,
) {
    let hobbies = serde_json::to_string(hobbies).unwrap();
    sqlx::query("INSERT INTO users (user_id, hobbies, city, cluster) VALUES (?1, ?2, ?3, ?4)")
        .bind(user_id)
        .bind(hobbies)
        .bind(city)
        .bind(cluster)
        .execute(pool)
        .await
        .expect("insert user");
}

pub async fn insert_chat(pool: &SqlitePool, chat_id: &str, request_status: Option<&str>) {
    sqlx::query("INSERT INTO chats (chat_id, request_status) VALUES (?1, ?2)")
        .bind(chat_id)
        .bind(request_status)
        .execute(pool)
        .await
        .expect("insert chat");
}

pub fn recommender(events: &[(&str, &str)]) -> Arc<RecommendationContext> {
    let records = events
        .iter()
        .map(|(title, location)| EventRecord {
            title: title.to_string(),
            location: location.to_string(),
        })
        .collect();
    let catalog = EventCatalog::from_records(records, &KeywordEmbedder).expect("catalog");
    Arc::new(RecommendationContext::new(catalog, Arc::new(KeywordEmbedder)))
}

pub fn state(pool: SqlitePool, events: &[(&str, &str)]) -> AppState {
    AppState {
        pool,
        recommender: recommender(events),
        public_url: "https://matchmaker.test".to_string(),
    }
}
