use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub location: String,
    pub score: f32,
}
