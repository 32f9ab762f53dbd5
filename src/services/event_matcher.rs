use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::embedding::TextEmbedder;
use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::event_catalog::EventCatalog;

pub const MAX_RECOMMENDATIONS: usize = 20;

/// Event table plus the model that embedded it. Built once at startup, never mutated.
pub struct RecommendationContext {
    catalog: EventCatalog,
    embedder: Arc<dyn TextEmbedder>,
}

impl RecommendationContext {
    pub fn new(catalog: EventCatalog, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { catalog, embedder }
    }

    /// Top events in any of `cities`, ranked by title similarity to the joined hobbies.
    ///
    /// Ties keep catalog order. Fewer than [`MAX_RECOMMENDATIONS`] matches is not an error.
    pub fn recommend(
        &self,
        hobbies: &BTreeSet<String>,
        cities: &BTreeSet<String>,
    ) -> AppResult<Vec<Recommendation>> {
        if hobbies.is_empty() || cities.is_empty() {
            return Err(AppError::invalid_input("Hobbies or cities are empty"));
        }

        let user_text = hobbies.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        let user_embedding = self.embedder.embed(&user_text)?;

        let cities: BTreeSet<String> = cities.iter().map(|c| c.to_lowercase()).collect();

        let mut recommendations: Vec<Recommendation> = self
            .catalog
            .entries()
            .iter()
            .filter(|entry| cities.contains(&entry.location_key))
            .map(|entry| Recommendation {
                title: entry.event.title.clone(),
                location: entry.event.location.clone(),
                score: user_embedding.similarity(&entry.embedding),
            })
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        Ok(recommendations)
    }
}
