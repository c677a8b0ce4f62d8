use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Stop sequence sent with every completion request. Generation stops at the
/// first blank line, which keeps stories to a single block of prose.
pub const STOP_SEQUENCE: &str = "\n\n";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BUCKET_NAME environment variable is not set")]
    MissingBucket,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bucket: String,
    pub inference_url: String,
    pub storage_url: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Config {
    /// Reads configuration from the process environment. The destination
    /// bucket has no sensible default and its absence is an error at startup
    /// rather than a surprise mid-request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = env::var("BUCKET_NAME")
            .ok()
            .filter(|b| !b.is_empty())
            .ok_or(ConfigError::MissingBucket)?;

        Ok(Self {
            bucket,
            inference_url: env::var("INFERENCE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            storage_url: env::var("STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".into()),
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| "ai21.j2-ultra-v1".into()),
            max_tokens: env::var("MAX_TOKENS")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .unwrap_or(8000),
            temperature: env::var("TEMPERATURE")
                .unwrap_or_else(|_| "0.8".into())
                .parse()
                .unwrap_or(0.8),
            top_p: env::var("TOP_P")
                .unwrap_or_else(|_| "0.9".into())
                .parse()
                .unwrap_or(0.9),
        })
    }
}
