//! HTTP layer: router, handlers, shared state, API errors.

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

/// Bind and serve until the process is terminated.
pub async fn serve(addr: SocketAddr, static_dir: &Path) -> Result<()> {
    let app = router(AppState::new(), static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("AVL tree server running on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
