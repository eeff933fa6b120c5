//! In-process viewer counters, exposed as JSON on `/metrics`.

use dashboard_catalog::{NoticeLevel, RenderedView};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Dashboard viewer metrics
#[derive(Debug, Default)]
pub struct ViewerMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,

    // Views
    pub views_rendered: AtomicU64,
    pub notices_info: AtomicU64,
    pub notices_warning: AtomicU64,
    pub notices_error: AtomicU64,

    // Transfers
    pub images_served: AtomicU64,
    pub downloads_served: AtomicU64,
    pub bytes_served: AtomicU64,

    // Latency tracking (sum and count)
    pub total_latency_ms: AtomicU64,
    pub request_count_for_latency: AtomicU64,
}

impl ViewerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished HTTP request
    pub fn record_request(&self, success: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
        self.request_count_for_latency
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rendered view and its notices
    pub fn record_view(&self, view: &RenderedView) {
        self.views_rendered.fetch_add(1, Ordering::Relaxed);

        for (level, _) in view.notices() {
            let counter = match level {
                NoticeLevel::Info => &self.notices_info,
                NoticeLevel::Warning => &self.notices_warning,
                NoticeLevel::Error => &self.notices_error,
            };
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a served image
    pub fn record_image(&self, bytes: usize) {
        self.images_served.fetch_add(1, Ordering::Relaxed);
        self.bytes_served.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Record a served spreadsheet
    pub fn record_download(&self, bytes: usize) {
        self.downloads_served.fetch_add(1, Ordering::Relaxed);
        self.bytes_served.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.request_count_for_latency.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "error": self.requests_error.load(Ordering::Relaxed),
            },
            "views": {
                "rendered": self.views_rendered.load(Ordering::Relaxed),
                "notices": {
                    "info": self.notices_info.load(Ordering::Relaxed),
                    "warning": self.notices_warning.load(Ordering::Relaxed),
                    "error": self.notices_error.load(Ordering::Relaxed),
                },
            },
            "transfers": {
                "images": self.images_served.load(Ordering::Relaxed),
                "downloads": self.downloads_served.load(Ordering::Relaxed),
                "bytes": self.bytes_served.load(Ordering::Relaxed),
            },
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Request timer for latency tracking
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
