//! Calculator server wiring
//!
//! Produces the registration table for the hub and runs the server process.

use anyhow::{Context, Result};
use calc_bootstrap::ServerConfig;
use tokio_util::sync::CancellationToken;

use calculator_sdk::{CalculatorServiceServer, FILE_DESCRIPTOR_SET, SERVICE_NAME};

use crate::api::grpc::CalculatorServiceImpl;
use crate::domain::Service;
use crate::hub::{GrpcHub, RegisterGrpcServiceFn};

/// Service name of the gRPC server reflection v1 service.
pub const REFLECTION_SERVICE_NAME: &str = "grpc.reflection.v1.ServerReflection";

/// Installers for the calculator service and, if enabled, server reflection.
///
/// # Errors
/// Returns an error if the reflection service cannot decode the embedded descriptor set.
pub fn grpc_services(service: Service, reflection: bool) -> Result<Vec<RegisterGrpcServiceFn>> {
    let svc = CalculatorServiceServer::new(CalculatorServiceImpl::new(service));

    let mut installers = vec![RegisterGrpcServiceFn {
        service_name: SERVICE_NAME,
        register: Box::new(move |routes| {
            routes.add_service(svc.clone());
        }),
    }];

    if reflection {
        let reflection_svc = tonic_reflection::server::Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .context("failed to build gRPC reflection service")?;

        installers.push(RegisterGrpcServiceFn {
            service_name: REFLECTION_SERVICE_NAME,
            register: Box::new(move |routes| {
                routes.add_service(reflection_svc.clone());
            }),
        });
    }

    Ok(installers)
}

/// Bind and serve until the process is terminated.
///
/// # Errors
/// Returns an error if the listen address is invalid, the port cannot be bound,
/// or the server stops with a failure.
pub async fn run_server(cfg: &ServerConfig) -> Result<()> {
    let addr = cfg.socket_addr()?;
    let hub = GrpcHub::new(grpc_services(Service::new(), cfg.reflection)?);

    let listener = GrpcHub::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        reflection = cfg.reflection,
        "calculator server ready to accept connections"
    );

    // Never cancelled: the process runs until it is killed.
    hub.serve(listener, CancellationToken::new()).await
}
