//! gRPC client implementation of `CalculatorClient`

use async_trait::async_trait;
use calc_transport_grpc::client::{GrpcClientConfig, connect_with_stack};
use calc_transport_grpc::{CallContext, attach_deadline};
use tonic::transport::Channel;

use crate::api::{CalculatorClient, CalculatorError};
use crate::proto::AddRequest;
use crate::proto::calculator_service_client::CalculatorServiceClient;

/// gRPC client implementation of `CalculatorClient`.
///
/// Owns a single connection; dropping the client closes it.
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: CalculatorServiceClient<Channel>,
}

impl CalculatorGrpcClient {
    /// Connect once to the `CalculatorService`. There is no retry.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Connect`] if the URI is invalid or the server
    /// cannot be reached within the configured connect timeout.
    pub async fn connect(
        uri: impl Into<String>,
        cfg: &GrpcClientConfig,
    ) -> Result<Self, CalculatorError> {
        let channel: Channel = connect_with_stack(uri, cfg)
            .await
            .map_err(|e| CalculatorError::Connect(format!("{e:#}")))?;
        Ok(Self {
            inner: CalculatorServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl CalculatorClient for CalculatorGrpcClient {
    async fn add(&self, ctx: &CallContext, a: i32, b: i32) -> Result<i32, CalculatorError> {
        let mut client = self.inner.clone();

        let mut request = tonic::Request::new(AddRequest { a, b });
        attach_deadline(&mut request, ctx).inspect_err(|_| {
            tracing::debug!(a, b, "deadline elapsed, Add not sent");
        })?;
        tracing::debug!(a, b, remaining = ?ctx.remaining(), "sending Add");

        // The server sees the same budget through grpc-timeout; this bounds the wait locally.
        let response = tokio::time::timeout_at(ctx.deadline(), client.add(request))
            .await
            .map_err(|_| CalculatorError::DeadlineExceeded)?
            .map_err(|status| {
                // A server-side timeout may surface as CANCELLED.
                if ctx.is_expired() {
                    CalculatorError::DeadlineExceeded
                } else {
                    CalculatorError::from(status)
                }
            })?;

        Ok(response.into_inner().result)
    }
}
