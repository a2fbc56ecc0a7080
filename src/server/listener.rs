//! Relay server
//!
//! Binds the HTTP listener and serves the router until shut down. Viewer
//! sessions are tasks spawned by the runtime per connection; the server
//! itself only owns the shared relay state.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::error::Result;
use crate::relay::{RelayConfig, RelayState};
use crate::server::config::ServerConfig;
use crate::server::routes::build_router;

/// HTTP relay server
pub struct RelayServer {
    config: ServerConfig,
    state: Arc<RelayState>,
}

impl RelayServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self::with_relay_config(config, RelayConfig::default())
    }

    /// Create a new server with custom relay thresholds and cadences
    pub fn with_relay_config(config: ServerConfig, relay_config: RelayConfig) -> Self {
        Self {
            config,
            state: Arc::new(RelayState::new(relay_config)),
        }
    }

    /// Get a reference to the shared relay state
    pub fn state(&self) -> &Arc<RelayState> {
        &self.state
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }

    /// Run the server
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(&self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            max_clients = self.config.max_clients,
            "Relay server listening"
        );

        let router = build_router(Arc::clone(&self.state));

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        Ok(())
    }
}
