//! Immutable in-memory event table, loaded once at startup.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::embedding::{Embedding, TextEmbedder};
use crate::models::EventRecord;

const REQUIRED_COLUMNS: &[&str] = &["title", "location"];

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub event: EventRecord,
    /// Lower-cased location, compared against lower-cased city names.
    pub location_key: String,
    /// Title embedding, computed once at load.
    pub embedding: Embedding,
}

#[derive(Debug, Default)]
pub struct EventCatalog {
    entries: Vec<CatalogEntry>,
}

impl EventCatalog {
    pub fn from_csv_path(path: &Path, embedder: &dyn TextEmbedder) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open event dataset {}", path.display()))?;
        let catalog = Self::from_csv_reader(file, embedder)
            .with_context(|| format!("Failed to load event dataset {}", path.display()))?;
        info!(path = %path.display(), events = catalog.len(), "event catalog loaded");
        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R, embedder: &dyn TextEmbedder) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);

        let headers = reader.headers().context("Failed to read CSV headers")?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                bail!(
                    "Event dataset is missing the '{}' column (found: {:?})",
                    column,
                    headers.iter().collect::<Vec<_>>()
                );
            }
        }

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<EventRecord>().enumerate() {
            // +2: header line, 1-based
            let record = row.with_context(|| format!("Malformed event on line {}", i + 2))?;
            records.push(record);
        }

        Self::from_records(records, embedder)
    }

    pub fn from_records(records: Vec<EventRecord>, embedder: &dyn TextEmbedder) -> Result<Self> {
        let entries = records
            .into_iter()
            .map(|event| {
                let embedding = embedder
                    .embed(&event.title)
                    .with_context(|| format!("Failed to embed event title {:?}", event.title))?;
                Ok::<_, anyhow::Error>(CatalogEntry {
                    location_key: event.location.to_lowercase(),
                    event,
                    embedding,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
