// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! Dashboard Gateway - HTTP front end for the thesis dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  DASHBOARD GATEWAY                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  GET /  /views/:slug  /artifacts/png/:f  /downloads/:f   │
//! │                        │                                  │
//! │  ┌─────────────────────┴──────────────────────┐          │
//! │  │            Middleware Stack                 │          │
//! │  │        CORS → Tracing → Timeout             │          │
//! │  └─────────────────────┬──────────────────────┘          │
//! │                        │                                  │
//! │  ┌─────────────────────┴──────────────────────┐          │
//! │  │   PresentationApi (dashboard-catalog)       │          │
//! │  │   RenderedView ──► page::render_page        │          │
//! │  └─────────────────────┬──────────────────────┘          │
//! └────────────────────────┼─────────────────────────────────┘
//!                          │
//!              html/   png/   excel/
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use dashboard_gateway::{DashboardGatewayService, GatewayConfig};
//!
//! let service = DashboardGatewayService::new(GatewayConfig::default())?;
//! service.start(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

pub mod domain;
pub mod http;
pub mod middleware;
pub mod service;

pub use domain::config::{
    ArtifactsConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, PageConfig, TimeoutConfig,
};
pub use domain::error::{ErrorCode, GatewayError, ViewerError};
pub use http::{esc, render_error_page, render_page, AppState};
pub use middleware::ViewerMetrics;
pub use service::DashboardGatewayService;
