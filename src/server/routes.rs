//! Router construction and request handlers.
//!
//! Four JSON endpoints over the shared tree, with the visualizer's static
//! assets served for every other path.

use std::path::Path;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{extract::State, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::server::error::ApiError;
use crate::server::response::{KeyRequest, TreeResponse};
use crate::server::state::AppState;

/// Build the application router.
///
/// `/api/*` carries the tree protocol; anything else falls back to static
/// files under `static_dir` (with `/` serving `index.html`). CORS is
/// permissive so the UI can be served from elsewhere during development.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/tree", get(get_tree))
        .route("/insert", post(insert_key))
        .route("/delete", post(delete_key))
        .route("/clear", post(clear_tree))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn get_tree(State(state): State<AppState>) -> Json<TreeResponse> {
    let tree = state.tree.lock().unwrap();
    Json(TreeResponse {
        tree: tree.snapshot(),
        size: tree.size(),
        message: None,
    })
}

async fn insert_key(
    State(state): State<AppState>,
    payload: Result<Json<KeyRequest>, JsonRejection>,
) -> Result<Json<TreeResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut tree = state.tree.lock().unwrap();
    let inserted = tree.insert(req.value);
    debug!(value = req.value, inserted, size = tree.size(), "insert");

    Ok(Json(TreeResponse {
        tree: tree.snapshot(),
        size: tree.size(),
        message: Some(format!("Inserted {}", req.value)),
    }))
}

async fn delete_key(
    State(state): State<AppState>,
    payload: Result<Json<KeyRequest>, JsonRejection>,
) -> Result<Json<TreeResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut tree = state.tree.lock().unwrap();
    let removed = tree.delete(req.value);
    debug!(value = req.value, removed, size = tree.size(), "delete");

    let message = if removed {
        format!("Deleted {}", req.value)
    } else {
        format!("Value {} not found", req.value)
    };
    Ok(Json(TreeResponse {
        tree: tree.snapshot(),
        size: tree.size(),
        message: Some(message),
    }))
}

async fn clear_tree(State(state): State<AppState>) -> Json<TreeResponse> {
    let mut tree = state.tree.lock().unwrap();
    tree.clear();
    info!("tree cleared");

    Json(TreeResponse {
        tree: None,
        size: 0,
        message: Some("Tree cleared".to_string()),
    })
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound
}
