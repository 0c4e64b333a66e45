//! trafficserver-metrics — scrape-and-republish core of the exporter.
//!
//! Fetches the Apache Traffic Server `stats_over_http` document, decodes
//! the known statistics and renders them as Prometheus samples, together
//! with a `trafficserver_up` liveness gauge.
//!
//! # Architecture
//!
//! ```text
//! Collector (immutable config + descriptors, shared via Arc)
//!   ├── collect() ← called once per scrape request
//!   │   ├── ScrapeConfig::target() → Url
//!   │   ├── Fetcher::fetch()       → Bytes
//!   │   ├── Snapshot::decode()     → Snapshot
//!   │   └── samples()              → Vec<Sample>
//!   └── on any failure            → [trafficserver_up 0]
//!
//! Prometheus exposition
//!   └── render_prometheus() → text/plain for /metrics endpoint
//! ```

pub mod collector;
pub mod error;
pub mod fetcher;
pub mod naming;
pub mod prometheus;
pub mod schema;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use collector::{Collector, MetricDesc, Sample};
pub use error::{ScrapeError, ScrapeResult};
pub use fetcher::{Fetcher, ScrapeConfig};
pub use naming::{NAMESPACE, metric_name, sanitize};
pub use prometheus::{CONTENT_TYPE, render_prometheus};
pub use schema::{MetricKind, STATS, StatField};
pub use snapshot::Snapshot;
