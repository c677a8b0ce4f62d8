use crate::config::Config;
use reqwest::Client;

/// Shared per-process state. Both clients are built once in `main` and hold
/// no per-request data, so reusing them across invocations is safe.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub inference_client: Client,
    pub storage_client: Client,
}
