//! Route handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};
use tracing::debug;

use crate::ApiState;

/// GET <metrics_path>
///
/// Always answers 200: an unreachable upstream is reported in the body as
/// `trafficserver_up 0`.
pub async fn prometheus_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let samples = state.collector.collect().await;
    debug!(samples = samples.len(), "serving exposition");

    let body = trafficserver_metrics::render_prometheus(&samples);
    (
        StatusCode::OK,
        [(CONTENT_TYPE, trafficserver_metrics::CONTENT_TYPE)],
        body,
    )
}

/// GET /
pub async fn landing_page(State(state): State<ApiState>) -> Html<String> {
    let path = escape_attr(&state.metrics_path);
    Html(format!(
        "<html>\n\
         <head><title>Trafficserver Exporter</title></head>\n\
         <body>\n\
         <h1>Trafficserver Exporter</h1>\n\
         <p><a href='{path}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    ))
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::to_bytes;
    use trafficserver_metrics::{Collector, ScrapeConfig};

    use super::*;

    fn test_state(uri: &str) -> ApiState {
        let config = ScrapeConfig {
            uri: uri.to_string(),
            ..ScrapeConfig::default()
        };
        ApiState {
            collector: Arc::new(Collector::new(config).unwrap()),
            metrics_path: "/metrics".to_string(),
        }
    }

    #[tokio::test]
    async fn prometheus_endpoint_reports_down_for_bad_target() {
        let state = test_state("not a uri");
        let resp = prometheus_metrics(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/plain; version=0.0.4"));

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("# TYPE trafficserver_up gauge\n"));
        assert!(body.contains("\ntrafficserver_up 0\n"));
        assert!(!body.contains("trafficserver_proxy_"));
    }

    #[tokio::test]
    async fn landing_page_links_metrics_path() {
        let mut state = test_state("http://localhost/_stats");
        state.metrics_path = "/scrape?a=1&b=<2>".to_string();

        let Html(page) = landing_page(State(state)).await;
        assert!(page.contains("<title>Trafficserver Exporter</title>"));
        assert!(page.contains("href='/scrape?a=1&amp;b=&lt;2&gt;'"));
    }
}
