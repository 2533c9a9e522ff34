//! Sandbox registry operations.
//!
//! The [`SandboxService`] is handed its repositories explicitly. It keeps no
//! collections of its own, so every read goes to the store and concurrent
//! writers to the same sandbox race there, last writer wins.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use uuid::Uuid;

use super::{
    memstore::MemoryStore,
    models::{SandboxConfig, SandboxRecord, SandboxStatus, SandboxUpdate},
    sqlite::SqliteStore,
    store::{SandboxRepository, SessionRepository},
};
use crate::{
    config::{ServerConfig, StoreKind, DEFAULT_PROVISION_DELAY},
    simulator::CommandTable,
    TrolixError, TrolixResult,
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Sandbox registry, terminal simulator and history reader over a pair of repositories.
#[derive(Clone)]
pub struct SandboxService {
    pub(super) sandboxes: Arc<dyn SandboxRepository>,
    pub(super) sessions: Arc<dyn SessionRepository>,
    pub(super) commands: Arc<CommandTable>,
    provision_delay: Duration,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SandboxService {
    /// Creates a service over the given repositories with the standard command table.
    pub fn new(
        sandboxes: Arc<dyn SandboxRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            sandboxes,
            sessions,
            commands: Arc::new(CommandTable::standard()),
            provision_delay: DEFAULT_PROVISION_DELAY,
        }
    }

    /// Creates a service whose repositories both live in process memory.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }

    /// Creates a service over the store selected by `config`.
    pub async fn from_config(config: &ServerConfig) -> TrolixResult<Self> {
        let service = match config.get_store() {
            StoreKind::Sqlite => {
                let store = Arc::new(SqliteStore::open(config.get_db_path()).await?);
                tracing::info!("using sqlite store at {}", config.get_db_path().display());
                Self::new(store.clone(), store)
            }
            StoreKind::Memory => {
                tracing::info!("using in-memory store");
                Self::in_memory()
            }
        };

        Ok(service.with_provision_delay(config.get_provision_delay()))
    }

    /// Sets how long create waits before marking a sandbox running.
    pub fn with_provision_delay(mut self, delay: Duration) -> Self {
        self.provision_delay = delay;
        self
    }

    /// Replaces the command table used by the terminal simulator.
    pub fn with_command_table(mut self, commands: CommandTable) -> Self {
        self.commands = Arc::new(commands);
        self
    }

    /// The configured provisioning delay.
    pub fn provision_delay(&self) -> Duration {
        self.provision_delay
    }

    /// Returns every sandbox record.
    pub async fn list(&self) -> TrolixResult<Vec<SandboxRecord>> {
        self.sandboxes.find_all().await
    }

    /// Creates a sandbox and returns its id.
    ///
    /// The record is written as `creating`, then the call waits out the
    /// provisioning delay and overwrites the status with `running`. Readers see
    /// `creating` during that window. The two writes are not atomic: if the
    /// second one fails the error is returned and the record stays `creating`.
    pub async fn create(&self, config: SandboxConfig) -> TrolixResult<String> {
        let id = Uuid::new_v4().to_string();
        let record = SandboxRecord::new(id.clone(), config, Utc::now());

        self.sandboxes.insert(&record).await?;
        tracing::info!(
            "created sandbox {} ({}, os_type={})",
            id,
            record.name,
            record.os_type
        );

        if !self.provision_delay.is_zero() {
            tokio::time::sleep(self.provision_delay).await;
        }

        let matched = self
            .sandboxes
            .update(&id, &SandboxUpdate::status(SandboxStatus::Running))
            .await?;
        if matched == 0 {
            tracing::warn!("sandbox {} was removed while provisioning", id);
        }

        Ok(id)
    }

    /// Marks a sandbox running and refreshes its last-accessed time.
    pub async fn start(&self, id: &str) -> TrolixResult<()> {
        let update = SandboxUpdate::status_touched(SandboxStatus::Running, Utc::now());
        self.apply_update(id, update).await
    }

    /// Marks a sandbox stopped.
    pub async fn stop(&self, id: &str) -> TrolixResult<()> {
        self.apply_update(id, SandboxUpdate::status(SandboxStatus::Stopped))
            .await
    }

    /// Marks a sandbox saved.
    pub async fn save(&self, id: &str) -> TrolixResult<()> {
        self.apply_update(id, SandboxUpdate::status(SandboxStatus::Saved))
            .await
    }

    /// Removes a sandbox. Its command history is kept.
    pub async fn delete(&self, id: &str) -> TrolixResult<()> {
        if self.sandboxes.delete(id).await? == 0 {
            return Err(TrolixError::SandboxNotFound(id.to_string()));
        }

        tracing::info!("deleted sandbox {}", id);
        Ok(())
    }

    async fn apply_update(&self, id: &str, update: SandboxUpdate) -> TrolixResult<()> {
        if self.sandboxes.update(id, &update).await? == 0 {
            return Err(TrolixError::SandboxNotFound(id.to_string()));
        }

        tracing::info!("sandbox {} is now {}", id, update.status);
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
