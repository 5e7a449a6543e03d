use crate::assets::STYLESHEET;
use crate::core::render::PageRenderer;
use crate::domain::model::CardDescriptor;
use crate::domain::ports::Storage;
use crate::utils::error::{HubError, Result};
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router<S: Storage + 'static>(renderer: Arc<PageRenderer<S>>) -> Router {
    Router::new()
        .route("/", get(index::<S>))
        .route("/assets/hub.css", get(stylesheet))
        .route("/api/cards", get(cards::<S>))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(renderer)
}

/// 啟動 HTTP 服務，直到收到 Ctrl+C
pub async fn serve<S: Storage + 'static>(renderer: Arc<PageRenderer<S>>, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| HubError::ServerError {
            message: format!("Failed to bind {}: {}", bind, e),
        })?;

    tracing::info!("🚀 Serving hub on http://{}", listener.local_addr()?);

    axum::serve(listener, router(renderer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HubError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn index<S: Storage>(State(renderer): State<Arc<PageRenderer<S>>>) -> Html<String> {
    Html(renderer.render_page().await)
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn cards<S: Storage>(
    State(renderer): State<Arc<PageRenderer<S>>>,
) -> Json<Vec<CardDescriptor>> {
    Json(renderer.cards().to_vec())
}

async fn healthz() -> &'static str {
    "ok"
}
