//! Calculator demonstration client
//!
//! Connects once, runs [`demo::DEMO_CASES`] under one shared deadline and
//! prints each result to stdout.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod demo;

use anyhow::Context;
use calc_bootstrap::ClientConfig;
use calc_transport_grpc::{CallContext, MAX_TIMEOUT};
use calc_transport_grpc::client::GrpcClientConfig;
use calculator_sdk::{CalculatorGrpcClient, SERVICE_NAME};

use crate::demo::{Calculation, DEMO_CASES, run_demo};

/// Run the whole demonstration against `cfg.endpoint`.
///
/// # Errors
/// Returns an error if the connection cannot be established or any call fails.
pub async fn run(cfg: &ClientConfig) -> anyhow::Result<Vec<Calculation>> {
    tracing::info!(endpoint = %cfg.endpoint, "connecting to calculator server");

    let grpc_cfg = GrpcClientConfig::new(SERVICE_NAME)
        .with_connect_timeout(cfg.connect_timeout())
        .with_rpc_timeout(cfg.deadline().min(MAX_TIMEOUT));
    let client = CalculatorGrpcClient::connect(&cfg.endpoint, &grpc_cfg)
        .await
        .with_context(|| format!("failed to connect to server at {}", cfg.endpoint))?;

    tracing::info!("connected to server");

    let ctx = CallContext::with_timeout(cfg.deadline());
    let results = run_demo(&client, &ctx, &DEMO_CASES, cfg.call_delay(), |c| {
        println!("Result: {c}");
    })
    .await
    .context("Add RPC failed")?;

    tracing::info!(count = results.len(), "all calculations completed successfully");
    Ok(results)
}
