//! Request tracing middleware.
//!
//! Opens one span per request and records the response status and latency
//! in it and in [`ViewerMetrics`].

use axum::{body::Body, http::Request, response::Response};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{info, info_span, warn, Instrument, Span};

use super::metrics::{RequestTimer, ViewerMetrics};

/// Tracing layer that creates spans for each request
#[derive(Clone)]
pub struct TracingLayer {
    metrics: Arc<ViewerMetrics>,
}

impl TracingLayer {
    pub fn new(metrics: Arc<ViewerMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService {
            inner,
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
    metrics: Arc<ViewerMetrics>,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();
        let metrics = Arc::clone(&self.metrics);

        let span = info_span!(
            "dashboard_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            http.status_code = tracing::field::Empty,
            latency_ms = tracing::field::Empty,
        );

        Box::pin(
            async move {
                let timer = RequestTimer::start();
                let result = inner.call(req).await;
                let latency_ms = timer.elapsed_ms();

                let current = Span::current();
                current.record("latency_ms", latency_ms);

                match &result {
                    Ok(response) => {
                        let status = response.status();
                        current.record("http.status_code", status.as_u16());
                        let success = !(status.is_client_error() || status.is_server_error());
                        metrics.record_request(success, latency_ms);
                        if success {
                            info!(status = status.as_u16(), latency_ms, "Request served");
                        } else {
                            warn!(status = status.as_u16(), latency_ms, "Request failed");
                        }
                    }
                    Err(_) => {
                        metrics.record_request(false, latency_ms);
                        warn!(latency_ms, "Request errored");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}
