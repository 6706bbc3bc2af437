//! REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use curio_core::{ModelId, ModelRecord, StoreError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::AppState;

/// API error response
#[derive(Serialize)]
struct ApiError {
    error: String,
}

impl ApiError {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Upload request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    model_url: Option<String>,
}

/// Successful upload response
#[derive(Serialize)]
pub struct UploadResponse {
    message: String,
    model: ModelRecord,
}

/// Register a 3D model by URL
pub async fn upload_model(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadRequest>,
) -> impl IntoResponse {
    let model_url = match req.model_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Model URL is required")),
            )
                .into_response()
        }
    };

    match state
        .create_model(req.name, req.description, model_url)
        .await
    {
        Ok(model) => {
            info!(id = %model.id, url = %model.url, "Model registered");
            (
                StatusCode::CREATED,
                Json(UploadResponse {
                    message: "Model uploaded successfully".to_string(),
                    model,
                }),
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to register model");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Error uploading model")),
            )
                .into_response()
        }
    }
}

/// List all registered models
pub async fn list_models(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let models = state.list_models().await;
    Json(models)
}

/// Delete a model by id
pub async fn delete_model(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.delete_model(&ModelId(id.clone())).await {
        Ok(_) => {
            info!(id = %id, "Model deleted");
            Json(serde_json::json!({"message": "Model deleted successfully"})).into_response()
        }
        Err(StoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiError::new("Model not found")),
        )
            .into_response(),
        Err(e) => {
            warn!(id = %id, error = %e, "Failed to delete model");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Unable to delete model")),
            )
                .into_response()
        }
    }
}

/// Get current configuration
pub async fn get_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.clone())
}
