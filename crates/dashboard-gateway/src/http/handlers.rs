//! Route handlers.
//!
//! The catalog does whole-file synchronous reads, so every call into it
//! runs on the blocking pool.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use dashboard_catalog::{FileTransfer, MenuOption, PresentationApi};
use dashboard_telemetry::log_event;
use std::sync::Arc;
use tracing::debug;

use crate::domain::config::PageConfig;
use crate::domain::error::ViewerError;
use crate::middleware::ViewerMetrics;

use super::page::render_page;

/// Shared state of the HTTP router
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PresentationApi>,
    pub page: Arc<PageConfig>,
    pub metrics: Arc<ViewerMetrics>,
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ViewerError> {
    render_view(state, MenuOption::DEFAULT).await
}

/// `GET /views/:slug`
pub async fn view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ViewerError> {
    let option = MenuOption::from_slug(&slug).ok_or_else(|| ViewerError::unknown_view(&slug))?;
    render_view(state, option).await
}

/// `GET /artifacts/png/:filename`
pub async fn image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ViewerError> {
    let api = Arc::clone(&state.api);
    let transfer = blocking(move || api.image(&filename)).await??;
    state.metrics.record_image(transfer.content.len());

    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static(transfer.mime))],
        transfer.content,
    )
        .into_response())
}

/// `GET /downloads/:filename`
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ViewerError> {
    let api = Arc::clone(&state.api);
    let transfer: FileTransfer = blocking(move || api.download(&filename)).await??;
    log_event!(
        info,
        "downloads",
        "Spreadsheet downloaded",
        filename = %transfer.filename,
        bytes = transfer.content.len()
    );
    state.metrics.record_download(transfer.content.len());

    let disposition = HeaderValue::from_str(&content_disposition(&transfer.filename))
        .map_err(|e| ViewerError::internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(transfer.mime)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        transfer.content,
    )
        .into_response())
}

/// `GET /health`
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "thesis-dashboard",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}

async fn render_view(state: AppState, option: MenuOption) -> Result<Html<String>, ViewerError> {
    debug!(option = option.slug(), "Rendering view");
    let api = Arc::clone(&state.api);
    let view = blocking(move || api.present(option)).await?;
    state.metrics.record_view(&view);

    Ok(Html(render_page(&state.page, &view)))
}

async fn blocking<T, F>(f: F) -> Result<T, ViewerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ViewerError::internal(format!("worker failed: {}", e)))
}

/// `attachment` with an ASCII fallback name and the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}
