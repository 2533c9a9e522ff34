//! Server state management.
//!
//! This module provides the ServerState type which carries the shared
//! [`SandboxService`] into every HTTP request handler.

use crate::management::SandboxService;

//-------------------------------------------------------------------------------------------------
// Types
//-------------------------------------------------------------------------------------------------

/// Shared server state containing the sandbox service
///
/// The service holds its repositories behind `Arc`s, so cloning the state per
/// request is cheap and every handler talks to the same store.
#[derive(Clone)]
pub struct ServerState {
    /// The sandbox service
    service: SandboxService,
}

impl ServerState {
    /// Creates a new ServerState instance
    pub fn new(service: SandboxService) -> Self {
        Self { service }
    }

    /// Gets a reference to the sandbox service
    pub fn service(&self) -> &SandboxService {
        &self.service
    }
}
