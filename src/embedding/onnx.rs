//! MiniLM-style sentence encoder on ONNX Runtime

use anyhow::{anyhow, bail, Context, Result};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::{Session, SessionOutputs};
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::info;

use super::{Embedding, TextEmbedder};

/// all-MiniLM-L6-v2 was trained on sequences up to this length.
pub const MAX_TOKENS: usize = 256;

pub struct OnnxEmbedder {
    // Session::run needs &mut; inference is serialized.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl OnnxEmbedder {
    pub fn load(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            bail!("Embedding model file does not exist: {}", model_path.display());
        }
        if !tokenizer_path.exists() {
            bail!("Tokenizer file does not exist: {}", tokenizer_path.display());
        }

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set thread count")?
            .commit_from_file(model_path)
            .context("Failed to load embedding model")?;

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_TOKENS,
                ..Default::default()
            }))
            .map_err(|e| anyhow!("Failed to configure truncation: {}", e))?;

        info!(model = %model_path.display(), "embedding model loaded");
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl TextEmbedder for OnnxEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("Tokenization failed: {}", e))?;

        let to_i64 = |xs: &[u32]| xs.iter().map(|&x| x as i64).collect::<Vec<i64>>();
        let input_ids = to_i64(encoding.get_ids());
        let attention_mask = to_i64(encoding.get_attention_mask());
        let token_type_ids = to_i64(encoding.get_type_ids());
        let seq_len = input_ids.len();

        let ids = Value::from_array((vec![1, seq_len], input_ids))?;
        let mask = Value::from_array((vec![1, seq_len], attention_mask.clone()))?;
        let types = Value::from_array((vec![1, seq_len], token_type_ids))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("Embedding session lock poisoned"))?;
        let outputs = session.run(ort::inputs![
            "input_ids" => ids,
            "attention_mask" => mask,
            "token_type_ids" => types
        ])?;
        let pooled = mean_pool(&outputs, &attention_mask)?;

        Ok(Embedding::new(pooled))
    }
}

/// Averages token vectors of `last_hidden_state` over positions where the mask is set.
fn mean_pool(outputs: &SessionOutputs, attention_mask: &[i64]) -> Result<Vec<f32>> {
    let hidden = outputs
        .get("last_hidden_state")
        .context("No last_hidden_state output found")?;

    let (shape, data) = hidden.try_extract_tensor::<f32>()?;
    let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
    let (seq_len, width) = match dims.as_slice() {
        [1, seq_len, width] if *width > 0 => (*seq_len, *width),
        other => bail!("Unexpected hidden state shape: {:?}", other),
    };

    let mut pooled = vec![0.0f32; width];
    let mut counted = 0usize;
    for (t, token) in data.chunks_exact(width).take(seq_len).enumerate() {
        if attention_mask.get(t).copied().unwrap_or(0) == 0 {
            continue;
        }
        pooled.iter_mut().zip(token).for_each(|(p, v)| *p += v);
        counted += 1;
    }

    if counted > 0 {
        pooled.iter_mut().for_each(|p| *p /= counted as f32);
    }
    Ok(pooled)
}
