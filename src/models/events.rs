use serde::Deserialize;

/// One row of the event dataset. Extra CSV columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub location: String,
}
