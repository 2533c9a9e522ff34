use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    models::{CommandLogEntry, SandboxRecord, SandboxUpdate},
    store::{SandboxRepository, SessionRepository},
};
use crate::TrolixResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Sandbox and session repositories kept in process memory.
///
/// Records are held in insertion order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sandboxes: RwLock<Vec<SandboxRecord>>,
    sessions: RwLock<Vec<CommandLogEntry>>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

#[async_trait]
impl SandboxRepository for MemoryStore {
    async fn insert(&self, record: &SandboxRecord) -> TrolixResult<()> {
        self.sandboxes.write().await.push(record.clone());
        Ok(())
    }

    async fn find_all(&self) -> TrolixResult<Vec<SandboxRecord>> {
        Ok(self.sandboxes.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> TrolixResult<Option<SandboxRecord>> {
        Ok(self
            .sandboxes
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn update(&self, id: &str, update: &SandboxUpdate) -> TrolixResult<u64> {
        let mut sandboxes = self.sandboxes.write().await;
        match sandboxes.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.apply(update);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> TrolixResult<u64> {
        let mut sandboxes = self.sandboxes.write().await;
        match sandboxes.iter().position(|record| record.id == id) {
            Some(index) => {
                sandboxes.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn append(&self, entry: &CommandLogEntry) -> TrolixResult<()> {
        self.sessions.write().await.push(entry.clone());
        Ok(())
    }

    async fn find_by_sandbox(&self, sandbox_id: &str) -> TrolixResult<Vec<CommandLogEntry>> {
        let mut entries: Vec<CommandLogEntry> = self
            .sessions
            .read()
            .await
            .iter()
            .filter(|entry| entry.sandbox_id == sandbox_id)
            .cloned()
            .collect();

        // Stable, so equal timestamps keep insertion order
        entries.sort_by_key(|entry| entry.timestamp);
        Ok(entries)
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::management::models::{SandboxConfig, SandboxStatus};

    #[tokio::test]
    async fn test_sandbox_crud() -> TrolixResult<()> {
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = SandboxRecord::new("a", SandboxConfig::new("one", "debian"), now);

        store.insert(&record).await?;
        assert_eq!(store.find_by_id("a").await?, Some(record.clone()));

        let saved = SandboxUpdate::status(SandboxStatus::Saved);
        assert_eq!(store.update("a", &saved).await?, 1);
        assert_eq!(store.update("b", &saved).await?, 0);
        assert_eq!(
            store.find_by_id("a").await?.map(|r| r.status),
            Some(SandboxStatus::Saved)
        );

        assert_eq!(store.delete("a").await?, 1);
        assert_eq!(store.delete("a").await?, 0);
        assert!(store.find_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_sessions_filtered_and_sorted() -> TrolixResult<()> {
        let store = MemoryStore::new();
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

        let entries = [("a", "late", 9), ("b", "other", 1), ("a", "early", 2)];
        for (sandbox_id, command, offset) in entries {
            store
                .append(&CommandLogEntry {
                    sandbox_id: sandbox_id.to_string(),
                    command: command.to_string(),
                    output: String::new(),
                    timestamp: base + Duration::seconds(offset),
                })
                .await?;
        }

        let commands: Vec<String> = store
            .find_by_sandbox("a")
            .await?
            .into_iter()
            .map(|e| e.command)
            .collect();
        assert_eq!(commands, ["early", "late"]);

        Ok(())
    }
}
