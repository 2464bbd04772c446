use anyhow::Context;
use axum::{
    routing::get,
    routing::post,
    Router,
};
use tracing_subscriber::{fmt, EnvFilter};
use tracing::{info, Level};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};
use crate::secrets::SECRET_MANAGER;
mod models;
mod controllers;
mod routers;
mod error;
mod extractor;
mod state;
use routers::{download_video_route, health_check_route, root_route};
use state::AppState;
mod secrets;

fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Core routes
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        // Stream link resolution
        .route("/download-video", post(download_video_route))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .with_target(false)
        .init();

    let state = AppState::from_secrets(&SECRET_MANAGER);
    let extractor = state.videos.extractor();
    info!(
        "🎬 Using extractor {} (timeout {}s)",
        extractor.program(),
        extractor.timeout().as_secs()
    );

    let port = SECRET_MANAGER.get("PORT");
    let backend_url = SECRET_MANAGER.get("BACKEND_URL");
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let app = build_router(state);

    info!("🎧 Video Downloader Backend listening on {} ({})", addr, backend_url);
    info!("📡 Download endpoint: POST /download-video");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
