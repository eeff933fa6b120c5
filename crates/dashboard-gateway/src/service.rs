//! Dashboard gateway service - main entry point.
//!
//! Owns the configuration, the presentation service and the metrics. Builds
//! the router and runs the HTTP server until its shutdown signal fires.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::http::handlers::{self, AppState};
use crate::middleware::{create_cors_layer, TimeoutLayer, TracingLayer, ViewerMetrics};
use axum::{routing::get, Router};
use dashboard_catalog::{DashboardService, FsArtifactSource, PresentationApi};
use dashboard_telemetry::log_event;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::info;

/// Dashboard gateway service state
pub struct DashboardGatewayService {
    config: GatewayConfig,
    api: Arc<dyn PresentationApi>,
    metrics: Arc<ViewerMetrics>,
}

impl DashboardGatewayService {
    /// Create a gateway over the filesystem artifact tree named in `config`.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let directory = config.artifact_directory();
        log_event!(
            info,
            "gateway",
            "Artifact directory configured",
            root = %config.artifacts.root.display(),
            interactive = %config.artifacts.interactive_dir,
            images = %config.artifacts.images_dir,
            spreadsheets = %config.artifacts.spreadsheets_dir
        );
        let api: Arc<dyn PresentationApi> =
            Arc::new(DashboardService::new(FsArtifactSource::new(directory)));

        Ok(Self::with_api(config, api))
    }

    /// Create a gateway over any presentation service.
    pub fn with_api(config: GatewayConfig, api: Arc<dyn PresentationApi>) -> Self {
        Self {
            config,
            api,
            metrics: Arc::new(ViewerMetrics::new()),
        }
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<ViewerMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Build the HTTP router with its middleware stack
    pub fn build_router(&self) -> Router {
        let state = AppState {
            api: Arc::clone(&self.api),
            page: Arc::new(self.config.page.clone()),
            metrics: Arc::clone(&self.metrics),
        };

        let middleware = ServiceBuilder::new()
            .layer(create_cors_layer(&self.config.cors))
            .layer(TracingLayer::new(Arc::clone(&self.metrics)))
            .layer(TimeoutLayer::new(self.config.timeouts.request));

        Router::new()
            .route("/", get(handlers::index))
            .route("/views/:slug", get(handlers::view))
            .route("/artifacts/png/:filename", get(handlers::image))
            .route("/downloads/:filename", get(handlers::download))
            .route("/health", get(handlers::health_check))
            .route("/metrics", get(handlers::metrics))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr()?;
        info!(addr = %local, "Dashboard listening");

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("Received shutdown signal");
            })
            .await?;

        info!("Dashboard stopped");
        Ok(())
    }
}
