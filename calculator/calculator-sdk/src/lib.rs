//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClient`)
//! - Error type (`CalculatorError`)
//! - gRPC client (`CalculatorGrpcClient`)
//! - Proto stubs and the encoded descriptor set for the server side
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, CalculatorGrpcClient};
//! use calc_transport_grpc::{CallContext, client::GrpcClientConfig};
//!
//! let client = CalculatorGrpcClient::connect("http://localhost:50051", &GrpcClientConfig::new(SERVICE_NAME)).await?;
//! let ctx = CallContext::with_timeout(Duration::from_secs(5));
//! let sum = client.add(&ctx, 1, 2).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClient, CalculatorError};

// === GRPC CLIENT ===
mod client;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `CalculatorService`
pub mod proto {
    tonic::include_proto!("calculator.v1");
}

// Re-export proto types needed by server
pub use proto::calculator_service_server::{CalculatorService, CalculatorServiceServer};
pub use proto::{AddRequest, AddResponse};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "calculator.v1.CalculatorService";

/// Encoded `FileDescriptorSet` of `calculator.proto`, served by the reflection service.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("calculator_descriptor");
