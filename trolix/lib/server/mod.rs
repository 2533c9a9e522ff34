//! Server module for the trolix REST API.
//!
//! This module exposes the sandbox service over HTTP. It provides:
//! - Health and OS template catalog endpoints
//! - Sandbox create, list, start, stop, save and delete
//! - Simulated terminal execution and per-sandbox command history

mod handlers;
mod routes;
mod state;
mod types;

use tokio::net::TcpListener;

use crate::{config::ServerConfig, management::SandboxService, TrolixResult};

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use routes::*;
pub use state::*;
pub use types::*;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The trolix API server
#[derive(Debug, Clone)]
pub struct SandboxServer {
    /// Server configuration
    config: ServerConfig,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SandboxServer {
    /// Create a new server instance
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Start the server and run until Ctrl-C is received
    pub async fn serve(&self) -> TrolixResult<()> {
        let service = SandboxService::from_config(&self.config).await?;
        let app = create_router(ServerState::new(service));

        let addr = self.config.get_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: Helpers
//--------------------------------------------------------------------------------------------------

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
