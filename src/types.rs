use serde::{Deserialize, Serialize};

#[derive(Deserialize, Clone)]
pub struct StoryRequest {
    pub story_topic: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct StoryResponse {
    pub message: String,
    pub story: String,
    pub s3_location: String,
}

/// Wire request for the inference backend. Field names follow the backend's
/// camelCase contract.
#[derive(Serialize, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(rename = "topP")]
    pub top_p: f32,
    #[serde(rename = "stopSequences")]
    pub stop_sequences: Vec<String>,
}

#[derive(Deserialize, Clone)]
pub struct CompletionResponse {
    pub completions: Vec<Completion>,
}

#[derive(Deserialize, Clone)]
pub struct Completion {
    pub data: CompletionData,
}

#[derive(Deserialize, Clone)]
pub struct CompletionData {
    pub text: String,
}

/// Result of a successful object write.
#[derive(Debug, Serialize, Clone)]
pub struct StoredObject {
    pub key: String,
    pub location: String,
}
