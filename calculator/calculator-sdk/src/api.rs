//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use async_trait::async_trait;
use calc_transport_grpc::CallContext;

/// Calculator API trait
///
/// Every call carries a [`CallContext`] whose deadline bounds it. Failures are
/// returned to the caller; whether to continue a sequence is the caller's call.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Add two numbers and return the sum.
    async fn add(&self, ctx: &CallContext, a: i32, b: i32) -> Result<i32, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),
}

impl From<tonic::Status> for CalculatorError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded,
            tonic::Code::Unavailable => Self::Unavailable(status.message().to_owned()),
            _ => Self::Transport(format!("{}: {}", status.code(), status.message())),
        }
    }
}
