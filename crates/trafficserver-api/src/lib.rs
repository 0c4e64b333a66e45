//! trafficserver-api — HTTP surface of the exporter.
//!
//! Serves the Prometheus exposition endpoint and a small landing page.
//! The [`Collector`] is injected by the caller; every request to the
//! metrics path runs one independent scrape cycle against it.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/` | Landing page linking to the metrics path |
//! | GET | `<metrics_path>` (default `/metrics`) | Prometheus exposition |

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use trafficserver_metrics::Collector;

/// Default path of the exposition endpoint.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Shared state for handlers.
#[derive(Clone)]
pub struct ApiState {
    pub collector: Arc<Collector>,
    pub metrics_path: String,
}

/// Build the exporter router.
///
/// `metrics_path` must be a literal path starting with `/`; `/` itself is
/// reserved for the landing page. The exporter binary checks this at startup.
pub fn build_router(collector: Arc<Collector>, metrics_path: &str) -> Router {
    let state = ApiState {
        collector,
        metrics_path: metrics_path.to_string(),
    };

    Router::new()
        .route(metrics_path, get(handlers::prometheus_metrics))
        .route("/", get(handlers::landing_page))
        .with_state(state)
}
