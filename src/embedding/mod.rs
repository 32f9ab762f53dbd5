//! Sentence embeddings for hobby text and event titles

#[cfg(feature = "onnx")]
pub mod onnx;

#[cfg(feature = "onnx")]
pub use onnx::OnnxEmbedder;

/// Unit-length embedding vector. Dot product of two of these is their cosine similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// Normalizes `data` to unit length. A zero vector stays zero.
    pub fn new(data: Vec<f32>) -> Self {
        Self(normalize(data))
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[cfg(test)]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Cosine similarity in [-1.0, 1.0]; 0.0 when either side is a zero vector.
    pub fn similarity(&self, other: &Self) -> f32 {
        let dot: f32 = self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum();
        dot.clamp(-1.0, 1.0)
    }
}

fn normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
    v
}

/// Text-to-vector model. Implementations are blocking and shared across requests.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> anyhow::Result<Embedding>;
}
