//! Local stand-ins for the Traffic Server stats endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use rustls::pki_types::{CertificateDer, PrivatePkcs8KeyDer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

use crate::fetcher::ScrapeConfig;

/// Serve `router` on an ephemeral loopback port.
pub(crate) async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Serve a fixed status and body at `/_stats`.
pub(crate) async fn serve_static(status: StatusCode, body: &'static str) -> SocketAddr {
    serve(Router::new().route("/_stats", get(move || async move { (status, body) }))).await
}

/// Serve `body` with status 200 over HTTPS, using a freshly generated
/// self-signed certificate for `127.0.0.1`.
///
/// Speaks just enough HTTP/1.1 for one request per connection.
pub(crate) async fn serve_tls(body: &'static str) -> SocketAddr {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cert = rcgen::generate_simple_self_signed(vec![
        "127.0.0.1".to_string(),
        "localhost".to_string(),
    ])
    .unwrap();
    let key = PrivatePkcs8KeyDer::from(cert.key_pair.serialize_der());
    let chain: Vec<CertificateDer<'static>> = vec![cert.cert.der().clone()];
    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, key.into())
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                continue;
            };
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // Fails here when the client rejects the certificate.
                let Ok(mut tls) = acceptor.accept(stream).await else {
                    return;
                };

                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tls.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = tls.write_all(response.as_bytes()).await;
                let _ = tls.shutdown().await;
            });
        }
    });

    addr
}

/// A loopback address nothing is listening on.
pub(crate) async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Scrape settings pointing at `/_stats` on `addr`.
pub(crate) fn stats_config(addr: SocketAddr) -> ScrapeConfig {
    ScrapeConfig {
        uri: format!("http://{addr}/_stats"),
        ..ScrapeConfig::default()
    }
}
