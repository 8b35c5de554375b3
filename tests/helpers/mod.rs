//! Stub backend for screen tests.

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use midining_client::ApiClient;

/// Serves `router` on an ephemeral port and returns a client pointed at it.
pub async fn spawn_backend(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}

/// A client whose base url nothing listens on.
pub async fn unreachable_backend() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap()
}
