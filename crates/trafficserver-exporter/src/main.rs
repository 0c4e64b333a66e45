//! trafficserver_exporter — Prometheus exporter for Apache Traffic Server.
//!
//! Scrapes the `stats_over_http` endpoint on every request to the metrics
//! path and republishes the known statistics as Prometheus samples.
//!
//! # Usage
//!
//! ```text
//! trafficserver_exporter \
//!     --web.listen-address :9548 \
//!     --trafficserver.scrape-uri https://ats.internal/_stats \
//!     --no-trafficserver.ssl-verify
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trafficserver_metrics::{Collector, ScrapeConfig};

#[derive(Debug, Parser)]
#[command(
    name = "trafficserver_exporter",
    about = "Prometheus exporter for Apache Traffic Server",
    version
)]
struct Cli {
    /// Address to listen on for web interface and telemetry. A bare
    /// `:port` listens on all interfaces.
    #[arg(long = "web.listen-address", default_value = ":9548")]
    listen_address: String,

    /// Path under which to expose metrics.
    #[arg(long = "web.telemetry-path", default_value = trafficserver_api::DEFAULT_METRICS_PATH)]
    metrics_path: String,

    /// URI on which to scrape TrafficServer.
    #[arg(long = "trafficserver.scrape-uri", default_value = "http://localhost/_stats")]
    scrape_uri: String,

    /// Verify the TLS certificate of the scrape URI.
    #[arg(
        long = "trafficserver.ssl-verify",
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        overrides_with = "no_ssl_verify"
    )]
    ssl_verify: bool,

    /// Skip TLS certificate verification of the scrape URI.
    #[arg(long = "no-trafficserver.ssl-verify", overrides_with = "ssl_verify")]
    no_ssl_verify: bool,

    /// Timeout in seconds for getting stats from TrafficServer. 0 disables
    /// the timeout.
    #[arg(long = "trafficserver.timeout", default_value = "5")]
    timeout: u64,

    /// Log filter when RUST_LOG is unset (e.g. "info", "debug").
    #[arg(long = "log.level", default_value = "info")]
    log_level: String,

    /// Log output format.
    #[arg(long = "log.format", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl Cli {
    fn scrape_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            uri: self.scrape_uri.clone(),
            ssl_verify: self.verify_tls(),
            timeout: Duration::from_secs(self.timeout),
        }
    }

    fn verify_tls(&self) -> bool {
        self.ssl_verify && !self.no_ssl_verify
    }

    /// Socket address to bind; `:port` means every interface.
    fn bind_address(&self) -> String {
        if self.listen_address.starts_with(':') {
            format!("[::]{}", self.listen_address)
        } else {
            self.listen_address.clone()
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !self.metrics_path.starts_with('/') || self.metrics_path == "/" {
            anyhow::bail!(
                "--web.telemetry-path must start with '/' and not be '/', got {:?}",
                self.metrics_path
            );
        }
        // The router treats these as captures or wildcards.
        let pattern_like = self.metrics_path.contains(['{', '}', '*'])
            || self.metrics_path.split('/').any(|seg| seg.starts_with(':'));
        if pattern_like {
            anyhow::bail!(
                "--web.telemetry-path must be a literal path, got {:?}",
                self.metrics_path
            );
        }
        Ok(())
    }
}

fn init_tracing(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid --log.level {level:?}"))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format)?;
    cli.validate()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting trafficserver_exporter"
    );

    let config = cli.scrape_config();
    if let Err(e) = config.target() {
        warn!(error = %e, "scrape uri is invalid; every scrape will report trafficserver_up 0");
    }

    let collector = Arc::new(Collector::new(config).context("failed to build collector")?);
    info!(
        uri = %cli.scrape_uri,
        ssl_verify = cli.verify_tls(),
        timeout_secs = cli.timeout,
        "scraping from"
    );

    let router = trafficserver_api::build_router(collector, &cli.metrics_path);

    let bind_address = cli.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!(
        addr = %listener.local_addr()?,
        metrics_path = %cli.metrics_path,
        "listening"
    );

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("trafficserver_exporter stopped");
    Ok(())
}
