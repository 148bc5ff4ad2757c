#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Smoke tests for the calculator-server binary.

use std::net::SocketAddr;
use std::process::Stdio;
use std::time::Duration;

use calc_transport_grpc::CallContext;
use calc_transport_grpc::client::GrpcClientConfig;
use calculator_sdk::{CalculatorClient, CalculatorGrpcClient, SERVICE_NAME};
use tokio::process::{Child, Command};

const SERVER_BIN: &str = env!("CARGO_BIN_EXE_calculator-server");

fn server_command(listen_addr: &str) -> Command {
    let mut cmd = Command::new(SERVER_BIN);
    cmd.env("CALCULATOR__SERVER__LISTEN_ADDR", listen_addr)
        .env("CALCULATOR__LOGGING__ANSI", "false")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    cmd
}

async fn free_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn connect_when_ready(addr: SocketAddr, server: &mut Child) -> CalculatorGrpcClient {
    let cfg = GrpcClientConfig::new(SERVICE_NAME).with_connect_timeout(Duration::from_millis(500));
    for _ in 0..50 {
        if let Ok(client) = CalculatorGrpcClient::connect(format!("http://{addr}"), &cfg).await {
            return client;
        }
        assert!(
            server.try_wait().unwrap().is_none(),
            "server exited before accepting connections"
        );
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("server at {addr} never became reachable");
}

#[tokio::test]
async fn test_server_help_command() {
    let output = Command::new(SERVER_BIN)
        .arg("--help")
        .output()
        .await
        .expect("Failed to execute calculator-server");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
    assert!(stdout.contains("--verbose"));
}

#[tokio::test]
async fn test_server_answers_add() {
    let addr = free_addr().await;
    let mut server = server_command(&addr.to_string()).spawn().unwrap();

    let client = connect_when_ready(addr, &mut server).await;
    let ctx = CallContext::with_timeout(Duration::from_secs(5));

    assert_eq!(client.add(&ctx, 5, 3).await.unwrap(), 8);
    assert_eq!(client.add(&ctx, -5, 15).await.unwrap(), 10);

    server.kill().await.unwrap();
}

#[tokio::test]
async fn test_server_exits_when_port_is_taken() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let child = server_command(&addr.to_string()).spawn().unwrap();
    let output = tokio::time::timeout(Duration::from_secs(30), child.wait_with_output())
        .await
        .expect("server should exit on bind failure")
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reports = stderr.lines().filter(|line| line.contains("failed to bind")).count();
    assert_eq!(reports, 1, "the failure is reported once, stderr: {stderr}");
    assert!(stderr.contains("calculator server failed"));
}

#[tokio::test]
async fn test_server_rejects_invalid_listen_addr() {
    let child = server_command("not-an-addr").spawn().unwrap();
    let output = tokio::time::timeout(Duration::from_secs(30), child.wait_with_output())
        .await
        .expect("server should exit on bad config")
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-an-addr"), "stderr: {stderr}");
}
