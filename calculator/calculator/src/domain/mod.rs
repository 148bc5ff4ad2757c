//! Domain layer for calculator module
//!
//! Contains the pure arithmetic behind the gRPC surface.

pub mod service;

pub use service::Service;
