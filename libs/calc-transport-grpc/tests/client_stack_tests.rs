#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for gRPC client transport stack

use calc_transport_grpc::client::{connect_with_stack, GrpcClientConfig};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::RoutesBuilder;
use tonic::transport::{Channel, Server};

// Fake client type for testing
#[derive(Clone)]
struct FakeClient {
    _channel: Channel,
}

impl From<Channel> for FakeClient {
    fn from(channel: Channel) -> Self {
        Self { _channel: channel }
    }
}

#[tokio::test]
async fn connect_with_stack_fails_fast_on_unreachable_server() {
    let cfg = GrpcClientConfig::new("test")
        .with_connect_timeout(Duration::from_millis(100))
        .with_rpc_timeout(Duration::from_millis(200));

    // Non-routable address, bounded by connect_timeout
    let started = Instant::now();
    let result = connect_with_stack::<FakeClient>("http://192.0.2.1:50051", &cfg).await;

    assert!(
        result.is_err(),
        "Should fail to connect to non-existent server"
    );
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "connect_timeout should bound the attempt, took {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn connect_with_stack_rejects_invalid_uri() {
    let cfg = GrpcClientConfig::default();

    let result = connect_with_stack::<FakeClient>("not a valid uri", &cfg).await;
    assert!(result.is_err(), "Should fail with invalid URI");
}

#[tokio::test]
async fn connect_with_stack_reaches_live_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let cancel = CancellationToken::new();

    let server = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            Server::builder()
                .add_routes(RoutesBuilder::default().routes())
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                    cancel.cancelled().await;
                })
                .await
        })
    };

    let cfg = GrpcClientConfig::new("test").with_connect_timeout(Duration::from_secs(2));
    let result = connect_with_stack::<FakeClient>(format!("http://{addr}"), &cfg).await;
    assert!(result.is_ok(), "Should connect to a listening server");

    cancel.cancel();
    server.abort();
}

