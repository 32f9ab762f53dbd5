//! Process configuration, read once at startup.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_EVENT_CSV: &str = "event_dataset.csv";
pub const DEFAULT_MODEL_PATH: &str = "models/all-MiniLM-L6-v2/model.onnx";
pub const DEFAULT_TOKENIZER_PATH: &str = "models/all-MiniLM-L6-v2/tokenizer.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub event_csv_path: PathBuf,
    pub model_path: PathBuf,
    pub tokenizer_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub public_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            event_csv_path: get("EVENT_CSV_PATH")
                .unwrap_or_else(|| DEFAULT_EVENT_CSV.to_string())
                .into(),
            model_path: get("EMBEDDING_MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
                .into(),
            tokenizer_path: get("TOKENIZER_PATH")
                .unwrap_or_else(|| DEFAULT_TOKENIZER_PATH.to_string())
                .into(),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            public_url: get("PUBLIC_URL"),
        })
    }

    /// Fails if any of the input files is missing.
    pub fn check_files(&self) -> Result<()> {
        for (label, path) in [
            ("EVENT_CSV_PATH", &self.event_csv_path),
            ("EMBEDDING_MODEL_PATH", &self.model_path),
            ("TOKENIZER_PATH", &self.tokenizer_path),
        ] {
            if !path.is_file() {
                bail!("{} points to a missing file: {}", label, path.display());
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn public_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.bind_addr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let cfg = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "sqlite://app.db")])).unwrap();
        assert_eq!(cfg.database_url, "sqlite://app.db");
        assert_eq!(cfg.event_csv_path, PathBuf::from(DEFAULT_EVENT_CSV));
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.public_url(), "http://0.0.0.0:8000");
    }

    #[test]
    fn database_url_is_required() {
        assert!(AppConfig::from_lookup(lookup(&[])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("DATABASE_URL", "   ")])).is_err());
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn public_url_override() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("PUBLIC_URL", "https://example.ngrok.io"),
        ]))
        .unwrap();
        assert_eq!(cfg.public_url(), "https://example.ngrok.io");
    }

    #[test]
    fn missing_files_fail_the_check() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://app.db"),
            ("EVENT_CSV_PATH", "/definitely/not/here.csv"),
        ]))
        .unwrap();
        let err = cfg.check_files().unwrap_err();
        assert!(err.to_string().contains("EVENT_CSV_PATH"));
    }
}
