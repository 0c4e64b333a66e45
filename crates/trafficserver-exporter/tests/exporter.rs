//! End-to-end scrape tests.
//!
//! Drives the exporter router with `oneshot` requests while a local axum
//! server stands in for the Traffic Server stats endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use tower::ServiceExt;
use trafficserver_api::build_router;
use trafficserver_metrics::{Collector, STATS, ScrapeConfig};

async fn spawn_upstream(status: StatusCode, body: &'static str) -> SocketAddr {
    let router = Router::new().route("/_stats", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn exporter(uri: String) -> Router {
    let config = ScrapeConfig {
        uri,
        ssl_verify: true,
        timeout: Duration::from_secs(2),
    };
    build_router(Arc::new(Collector::new(config).unwrap()), "/metrics")
}

async fn get_text(router: Router, path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Sample lines (`name value`) of an exposition body.
fn sample_lines(body: &str) -> Vec<(&str, f64)> {
    body.lines()
        .filter(|l| !l.starts_with('#') && !l.is_empty())
        .map(|l| {
            let (name, value) = l.split_once(' ').unwrap();
            (name, value.parse().unwrap())
        })
        .collect()
}

fn value_of(body: &str, name: &str) -> Option<f64> {
    sample_lines(body)
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
}

#[tokio::test]
async fn scrape_publishes_upstream_values() {
    let addr = spawn_upstream(
        StatusCode::OK,
        r#"{"global":{"proxy.process.cache.bytes_used":"104857600","proxy.process.unknown":"5"}}"#,
    )
    .await;

    let (status, body) = get_text(exporter(format!("http://{addr}/_stats")), "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(value_of(&body, "trafficserver_up"), Some(1.0));
    assert_eq!(
        value_of(&body, "trafficserver_proxy_process_cache_bytes_used"),
        Some(104857600.0)
    );
    assert!(body.contains("# TYPE trafficserver_proxy_process_cache_bytes_used counter\n"));
    assert_eq!(value_of(&body, "trafficserver_proxy_process_unknown"), None);

    // Every known stat is present exactly once, plus liveness.
    assert_eq!(sample_lines(&body).len(), STATS.len() + 1);
}

#[tokio::test]
async fn missing_stats_are_published_as_zero() {
    let addr = spawn_upstream(StatusCode::OK, r#"{"global":{}}"#).await;

    let (_, body) = get_text(exporter(format!("http://{addr}/_stats")), "/metrics").await;
    assert_eq!(value_of(&body, "trafficserver_up"), Some(1.0));
    assert_eq!(
        value_of(&body, "trafficserver_proxy_process_http_completed_requests"),
        Some(0.0)
    );
    assert_eq!(sample_lines(&body).len(), STATS.len() + 1);
}

#[tokio::test]
async fn upstream_500_publishes_only_down() {
    let addr = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, r#"{"global":{}}"#).await;

    let (status, body) = get_text(exporter(format!("http://{addr}/_stats")), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_lines(&body), vec![("trafficserver_up", 0.0)]);
}

#[tokio::test]
async fn malformed_json_publishes_only_down() {
    let addr = spawn_upstream(StatusCode::OK, r#"{"global": {"proxy.process"#).await;

    let (_, body) = get_text(exporter(format!("http://{addr}/_stats")), "/metrics").await;
    assert_eq!(sample_lines(&body), vec![("trafficserver_up", 0.0)]);
}

#[tokio::test]
async fn connection_refused_publishes_only_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_, body) = get_text(exporter(format!("http://{addr}/_stats")), "/metrics").await;
    assert_eq!(sample_lines(&body), vec![("trafficserver_up", 0.0)]);
}

#[tokio::test]
async fn invalid_uri_publishes_only_down() {
    let (_, body) = get_text(exporter("::bogus".to_string()), "/metrics").await;
    assert_eq!(sample_lines(&body), vec![("trafficserver_up", 0.0)]);
}

#[tokio::test]
async fn each_request_is_a_fresh_cycle() {
    let addr = spawn_upstream(StatusCode::OK, r#"{"global":{"proxy.node.proxy_running":"1"}}"#)
        .await;
    let router = exporter(format!("http://{addr}/_stats"));

    let (_, first) = get_text(router.clone(), "/metrics").await;
    let (_, second) = get_text(router, "/metrics").await;
    assert_eq!(first, second);
    assert_eq!(value_of(&first, "trafficserver_proxy_node_proxy_running"), Some(1.0));
}

#[tokio::test]
async fn landing_page_links_metrics() {
    let (status, body) = get_text(exporter("http://localhost/_stats".to_string()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Trafficserver Exporter</h1>"));
    assert!(body.contains("href='/metrics'"));
}

#[tokio::test]
async fn custom_metrics_path() {
    let addr = spawn_upstream(StatusCode::OK, r#"{"global":{}}"#).await;
    let config = ScrapeConfig {
        uri: format!("http://{addr}/_stats"),
        ..ScrapeConfig::default()
    };
    let router = build_router(Arc::new(Collector::new(config).unwrap()), "/ats/metrics");

    let (status, body) = get_text(router.clone(), "/ats/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value_of(&body, "trafficserver_up"), Some(1.0));

    let (status, _) = get_text(router, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
