//! The store interface the sandbox service is written against.
//!
//! Two repositories cover the two collections the service persists. Both are
//! object safe so the service can hold them as `Arc<dyn ...>` and the backing
//! store can be chosen at start-up.

use async_trait::async_trait;

use super::models::{CommandLogEntry, SandboxRecord, SandboxUpdate};
use crate::TrolixResult;

//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// Storage for sandbox records, keyed by the application-assigned id.
#[async_trait]
pub trait SandboxRepository: Send + Sync {
    /// Inserts a new record.
    async fn insert(&self, record: &SandboxRecord) -> TrolixResult<()>;

    /// Returns every record in store iteration order.
    async fn find_all(&self) -> TrolixResult<Vec<SandboxRecord>>;

    /// Returns the record with the given id, if any.
    async fn find_by_id(&self, id: &str) -> TrolixResult<Option<SandboxRecord>>;

    /// Applies an update to the record with the given id.
    ///
    /// Returns the number of records matched, which is zero when the id is unknown.
    async fn update(&self, id: &str, update: &SandboxUpdate) -> TrolixResult<u64>;

    /// Removes the record with the given id.
    ///
    /// Returns the number of records removed.
    async fn delete(&self, id: &str) -> TrolixResult<u64>;
}

/// Append-only storage for terminal command log entries.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Appends an entry.
    async fn append(&self, entry: &CommandLogEntry) -> TrolixResult<()>;

    /// Returns every entry for a sandbox ordered by timestamp ascending.
    ///
    /// Entries with equal timestamps keep their insertion order.
    async fn find_by_sandbox(&self, sandbox_id: &str) -> TrolixResult<Vec<CommandLogEntry>>;
}
