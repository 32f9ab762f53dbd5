use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::embedding::{Embedding, TextEmbedder};

const DIM: usize = 1024;

/// Bag-of-words embedder: each lower-cased word lights up one hashed bucket.
/// Texts sharing words score higher; texts with no shared words score 0.
pub struct KeywordEmbedder;

impl TextEmbedder for KeywordEmbedder {
    fn embed(&self, text: &str) -> anyhow::Result<Embedding> {
        let mut v = vec![0.0f32; DIM];
        for word in text.split_whitespace() {
            let mut h = DefaultHasher::new();
            word.to_lowercase().hash(&mut h);
            v[(h.finish() as usize) % DIM] += 1.0;
        }
        Ok(Embedding::new(v))
    }
}

/// Always fails, for exercising the internal-error path.
pub struct BrokenEmbedder;

impl TextEmbedder for BrokenEmbedder {
    fn embed(&self, _text: &str) -> anyhow::Result<Embedding> {
        anyhow::bail!("model unavailable")
    }
}
