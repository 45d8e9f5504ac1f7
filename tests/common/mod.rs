//! Shared utilities for transport integration tests.

use std::net::SocketAddr;

use axum::body::Body;
use axum::Router;
use futures_util::StreamExt;

/// Drain a host body into one contiguous byte vector.
#[allow(dead_code)]
pub async fn collect_body(body: Body) -> Vec<u8> {
    let mut data = body.into_data_stream();
    let mut collected = Vec::new();
    while let Some(chunk) = data.next().await {
        collected.extend_from_slice(&chunk.expect("body stream failed"));
    }
    collected
}

/// Serve a router on an ephemeral port and return its address.
#[allow(dead_code)]
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
