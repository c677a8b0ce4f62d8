use crate::config::{Config, STOP_SEQUENCE};
use crate::types::{CompletionRequest, CompletionResponse};
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("inference backend error: HTTP {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("failed to reach inference backend: {0}")]
    Connect(#[source] reqwest::Error),
    #[error("failed to decode inference response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Asks the inference backend for a short story about `topic`.
///
/// An empty completion is not an error here: the backend answered, it just
/// produced nothing usable. The caller decides what that means. Transport
/// failures, non-success statuses and undecodable bodies are errors.
pub async fn generate_story(
    client: &Client,
    config: &Config,
    topic: &str,
) -> Result<String, GenerationError> {
    let request = CompletionRequest {
        prompt: format!("Write a story with {topic}"),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        top_p: config.top_p,
        stop_sequences: vec![STOP_SEQUENCE.to_string()],
    };

    log::info!("Attempting to generate story with topic: {topic}");
    log::debug!(
        "Request body: {}",
        serde_json::to_string(&request).unwrap_or_default()
    );

    let url = format!(
        "{}/model/{}/invoke",
        config.inference_url, config.model_id
    );

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            log::error!("Failed to connect to inference backend: {e}");
            GenerationError::Connect(e)
        })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".into());
        log::error!("Inference backend error: HTTP {status}, body: {body}");
        return Err(GenerationError::Backend { status, body });
    }

    let parsed: CompletionResponse = response.json().await.map_err(|e| {
        log::error!("Failed to parse inference response: {e}");
        GenerationError::Decode(e)
    })?;

    let story = parsed
        .completions
        .first()
        .map(|c| c.data.text.clone())
        .unwrap_or_default();

    if story.is_empty() {
        log::error!("No story was generated in the response");
    } else {
        log::info!("Story generation completed, length: {} chars", story.len());
        log::debug!(
            "Story sample: \"{}...\"",
            story.chars().take(100).collect::<String>()
        );
    }

    Ok(story)
}
