#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator server
//!
//! A stateless gRPC service that adds two integers.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `hub.rs` - service registration table and the tonic serve loop
//! - `module.rs` - wiring of the calculator (and reflection) services
//!
//! Consumers should use the `calculator-sdk` crate, which provides the gRPC
//! client and the proto stubs.

// === MODULE DEFINITION ===
mod module;
pub use module::{REFLECTION_SERVICE_NAME, grpc_services, run_server};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
pub mod hub;
