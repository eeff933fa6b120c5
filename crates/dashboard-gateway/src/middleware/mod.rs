//! Middleware stack for the dashboard gateway.
//!
//! Layer order: Request → CORS → Tracing → Timeout → Handler

pub mod cors;
pub mod metrics;
pub mod timeout;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{RequestTimer, ViewerMetrics};
pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;
