//! Scrape-cycle collector.
//!
//! One call to [`Collector::collect`] is one scrape cycle:
//!
//! ```text
//! validate target → fetch → decode → up 1 + one sample per STATS entry
//!        └──────────────┴───────┴──→ up 0 only
//! ```
//!
//! Nothing is kept between cycles. The collector only holds its immutable
//! configuration and the metric descriptors built at construction, so it can
//! be shared across concurrent scrape requests without locking.

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::ScrapeResult;
use crate::fetcher::{Fetcher, ScrapeConfig};
use crate::naming::{NAMESPACE, metric_name};
use crate::schema::{MetricKind, STATS};
use crate::snapshot::Snapshot;

/// Name, help text and kind of one exported metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDesc {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
}

/// One observation produced by a scrape cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub desc: &'a MetricDesc,
    pub value: f64,
}

/// Fetches the upstream stats document and turns it into samples.
pub struct Collector {
    config: ScrapeConfig,
    fetcher: Fetcher,
    up: MetricDesc,
    /// One descriptor per [`STATS`] entry, same order.
    fields: Vec<MetricDesc>,
}

impl Collector {
    /// Build a collector and its metric descriptors.
    pub fn new(config: ScrapeConfig) -> ScrapeResult<Self> {
        let fetcher = Fetcher::new(&config)?;

        let up = MetricDesc {
            name: format!("{NAMESPACE}_up"),
            help: "Was talking to Trafficserver successfully".to_string(),
            kind: MetricKind::Gauge,
        };

        let fields = STATS
            .iter()
            .map(|field| MetricDesc {
                name: metric_name(NAMESPACE, field.key),
                help: format!("Trafficserver metric {}", field.key),
                kind: field.kind,
            })
            .collect();

        Ok(Self {
            config,
            fetcher,
            up,
            fields,
        })
    }

    /// Every descriptor this collector can emit, liveness first.
    pub fn describe(&self) -> impl Iterator<Item = &MetricDesc> {
        std::iter::once(&self.up).chain(self.fields.iter())
    }

    /// Validate the target, fetch it and decode the body.
    pub async fn scrape(&self) -> ScrapeResult<Snapshot> {
        let url = self.config.target()?;
        let body = self.fetcher.fetch(&url).await?;
        Snapshot::decode(&body)
    }

    /// Run one scrape cycle.
    ///
    /// Returns `up 1` followed by one sample per known statistic, or `up 0`
    /// alone if any stage failed. Never a partial batch.
    pub async fn collect(&self) -> Vec<Sample<'_>> {
        let started = Instant::now();

        match self.scrape().await {
            Ok(snapshot) => {
                let samples = self.samples(&snapshot);
                debug!(
                    samples = samples.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "scrape succeeded"
                );
                samples
            }
            Err(e) => {
                warn!(
                    error = %e,
                    stage = e.stage(),
                    uri = %self.config.uri,
                    "scrape failed"
                );
                vec![self.liveness(false)]
            }
        }
    }

    /// Samples for a decoded snapshot, `up 1` first.
    pub fn samples<'a>(&'a self, snapshot: &Snapshot) -> Vec<Sample<'a>> {
        let mut samples = Vec::with_capacity(self.fields.len() + 1);
        samples.push(self.liveness(true));
        samples.extend(
            self.fields
                .iter()
                .zip(snapshot.values())
                .map(|(desc, &value)| Sample { desc, value }),
        );
        samples
    }

    fn liveness(&self, up: bool) -> Sample<'_> {
        Sample {
            desc: &self.up,
            value: if up { 1.0 } else { 0.0 },
        }
    }
}
