//! gRPC hub
//!
//! Builds and hosts the single `tonic::Server` of the process from an explicit
//! table of service installers.

use std::collections::HashSet;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::{Routes, RoutesBuilder};
use tonic::transport::Server;

/// One entry of the registration table: a service name and the closure that
/// adds the service to the router.
pub struct RegisterGrpcServiceFn {
    pub service_name: &'static str,
    pub register: Box<dyn Fn(&mut RoutesBuilder) + Send + Sync>,
}

impl std::fmt::Debug for RegisterGrpcServiceFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterGrpcServiceFn")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}

/// Hosts every registered gRPC service behind one TCP listener.
#[derive(Debug)]
pub struct GrpcHub {
    installers: Vec<RegisterGrpcServiceFn>,
}

impl GrpcHub {
    #[must_use]
    pub fn new(installers: Vec<RegisterGrpcServiceFn>) -> Self {
        Self { installers }
    }

    /// Names of the registered services, in registration order.
    #[must_use]
    pub fn service_names(&self) -> Vec<&'static str> {
        self.installers.iter().map(|i| i.service_name).collect()
    }

    /// Validate that all service names are unique.
    fn validate_unique_services(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for installer in &self.installers {
            if !seen.insert(installer.service_name) {
                anyhow::bail!(
                    "Duplicate gRPC service detected: {}",
                    installer.service_name
                );
            }
        }
        Ok(())
    }

    /// Build routes from the installers. Returns None if no services registered.
    fn build_routes(&self) -> Option<Routes> {
        if self.installers.is_empty() {
            return None;
        }
        let mut routes_builder = RoutesBuilder::default();
        for installer in &self.installers {
            (installer.register)(&mut routes_builder);
        }
        Some(routes_builder.routes())
    }

    /// Bind the TCP listener. Connections queue in the backlog until [`Self::serve`] runs.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound.
    pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
        TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind gRPC listener on {addr}"))
    }

    /// Serve on `listener` until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error on duplicate service names or if the server fails.
    pub async fn serve(&self, listener: TcpListener, cancel: CancellationToken) -> anyhow::Result<()> {
        self.validate_unique_services()?;

        let Some(routes) = self.build_routes() else {
            tracing::warn!("no gRPC services registered; idling until cancelled");
            cancel.cancelled().await;
            return Ok(());
        };

        let bound_addr = listener.local_addr()?;
        tracing::info!(
            %bound_addr,
            transport = "tcp",
            services = ?self.service_names(),
            "gRPC hub listening"
        );

        let incoming = TcpListenerStream::new(listener);
        Server::builder()
            .add_routes(routes)
            .serve_with_incoming_shutdown(incoming, async move {
                cancel.cancelled().await;
            })
            .await
            .context("gRPC server failed")?;

        tracing::info!(%bound_addr, "gRPC hub stopped");
        Ok(())
    }
}
