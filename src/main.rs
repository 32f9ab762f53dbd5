use anyhow::{Context, Result};
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use matchmaker::config::AppConfig;
use matchmaker::embedding::{OnnxEmbedder, TextEmbedder};
use matchmaker::services::event_catalog::EventCatalog;
use matchmaker::services::event_matcher::RecommendationContext;
use matchmaker::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(build = env!("MATCHMAKER_BUILD_ID"), "starting matchmaker");

    let config = AppConfig::from_env()?;
    config.check_files()?;

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the user store")?;

    // Model load and title embedding are blocking; do them once, before serving.
    let recommender = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || -> Result<RecommendationContext> {
            let embedder: Arc<dyn TextEmbedder> =
                Arc::new(OnnxEmbedder::load(&config.model_path, &config.tokenizer_path)?);
            let catalog = EventCatalog::from_csv_path(&config.event_csv_path, embedder.as_ref())?;
            Ok(RecommendationContext::new(catalog, embedder))
        })
        .await
        .context("Startup task panicked")??
    };

    let state = AppState {
        pool,
        recommender: Arc::new(recommender),
        public_url: config.public_url(),
    };
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(addr = %listener.local_addr()?, public_url = %config.public_url(), "server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
