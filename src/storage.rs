use crate::config::Config;
use crate::types::StoredObject;
use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use uuid::Uuid;

/// Value of the `x-amz-meta-generator` tag on every stored object.
pub const GENERATOR_ID: &str = "storyforge";

const KEY_PREFIX: &str = "stories";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: HTTP {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("storage request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Builds an object key from a second-precision UTC timestamp and a short
/// random suffix. The suffix makes collisions within the same second a
/// non-issue without any coordination.
fn object_key(timestamp: &str) -> String {
    let id = Uuid::new_v4().to_string();
    format!("{KEY_PREFIX}/{timestamp}_{}.txt", &id[..8])
}

/// Writes the story text to the storage backend as a plain-text object.
///
/// Every failure comes back as a `StorageError`; the caller is expected to
/// keep the story text around so a failed write does not lose it.
pub async fn save_story(
    client: &Client,
    config: &Config,
    bucket: &str,
    text: &str,
) -> Result<StoredObject, StorageError> {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let key = object_key(&timestamp);

    log::info!("Attempting to save object: {key}");
    log::info!("Bucket: {bucket}, content length: {}", text.len());

    let url = format!("{}/{}/{}", config.storage_url, bucket, key);

    let response = client
        .put(&url)
        .header("Content-Type", "text/plain")
        .header("x-amz-meta-timestamp", &timestamp)
        .header("x-amz-meta-generator", GENERATOR_ID)
        .body(text.as_bytes().to_vec())
        .send()
        .await
        .map_err(|e| {
            log::error!("Storage request failed: {e}");
            StorageError::Request(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".into());
        log::error!("Storage backend error: HTTP {status} - {message}");
        return Err(StorageError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    log::info!("Object saved: s3://{bucket}/{key}");

    Ok(StoredObject {
        location: format!("s3://{bucket}/{key}"),
        key,
    })
}
