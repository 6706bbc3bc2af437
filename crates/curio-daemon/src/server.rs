//! HTTP server setup and routing

use anyhow::Result;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::api;
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/upload", post(api::upload_model))
        .route("/api/models", get(api::list_models))
        .route("/api/models/{id}", delete(api::delete_model))
        .route("/api/config", get(api::get_config))
        .nest_service(
            "/models",
            ServeDir::new(state.config.models.path.clone()),
        )
        .fallback_service(ServeDir::new("web"))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until shutdown
pub async fn run(state: Arc<AppState>, bind: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "Web server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
