//! HTTP client for the catalog API

use curio_core::{ModelId, ModelRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Catalog API connection configuration
///
/// The base URL is injected at construction time rather than read from any
/// global; asset paths are resolved against the same host.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP(S) base URL for the catalog API (e.g. "http://localhost:8080")
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve a model source URL for loading
    ///
    /// Absolute URLs pass through untouched; relative paths are served by
    /// the daemon and resolve against the API host.
    pub fn resolve_asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        let path = url.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

/// Request body for `POST /api/upload`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
    model_url: &'a str,
}

/// Response body for a successful upload
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub model: ModelRecord,
}

/// Error envelope returned by the daemon
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the catalog REST API
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Register a new model by URL
    pub async fn upload(
        &self,
        name: Option<&str>,
        description: Option<&str>,
        model_url: &str,
    ) -> Result<UploadResponse, ClientError> {
        let url = format!("{}/api/upload", self.config.base_url);
        debug!(url = %url, model_url = %model_url, "Uploading model");
        let response = self
            .client
            .post(&url)
            .json(&UploadRequest {
                name,
                description,
                model_url,
            })
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch all registered models
    pub async fn list_models(&self) -> Result<Vec<ModelRecord>, ClientError> {
        let url = format!("{}/api/models", self.config.base_url);
        let response = self.client.get(&url).send().await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a model by id
    pub async fn delete_model(&self, id: &ModelId) -> Result<(), ClientError> {
        let url = format!("{}/api/models/{}", self.config.base_url, id);
        debug!(url = %url, "Deleting model");
        let response = self.client.delete(&url).send().await?;
        error_for_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into a `ClientError::Status` carrying the
/// server's error text
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body),
        Err(_) => status.to_string(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
