//! gRPC Server implementation for calculator
//!
//! The server implementation handles gRPC requests and delegates
//! to the domain Service for business logic.

use tonic::{Request, Response, Status};

use calculator_sdk::{AddRequest, AddResponse, CalculatorService};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone, Default)]
pub struct CalculatorServiceImpl {
    service: Service,
}

impl CalculatorServiceImpl {
    /// Wrap the given domain `Service`.
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl CalculatorService for CalculatorServiceImpl {
    async fn add(&self, request: Request<AddRequest>) -> Result<Response<AddResponse>, Status> {
        let AddRequest { a, b } = request.into_inner();
        tracing::info!(a, b, "received Add request");

        let result = self.service.add(a, b);

        tracing::info!(result, "sending Add response");
        Ok(Response::new(AddResponse { result }))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    async fn call(a: i32, b: i32) -> i32 {
        CalculatorServiceImpl::default()
            .add(Request::new(AddRequest { a, b }))
            .await
            .unwrap()
            .into_inner()
            .result
    }

    #[tokio::test]
    async fn test_reference_scenarios() {
        assert_eq!(call(5, 3).await, 8);
        assert_eq!(call(10, 20).await, 30);
        assert_eq!(call(100, 200).await, 300);
        assert_eq!(call(-5, 15).await, 10);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_logs_request_and_response() {
        assert_eq!(call(5, 3).await, 8);

        assert!(logs_contain("received Add request"));
        assert!(logs_contain("a=5"));
        assert!(logs_contain("sending Add response"));
        assert!(logs_contain("result=8"));
    }
}
