use std::path::Path;

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use super::{
    db::{init_db, SANDBOX_DB_MIGRATOR},
    models::{CommandLogEntry, SandboxRecord, SandboxUpdate},
    store::{SandboxRepository, SessionRepository},
};
use crate::{
    utils::{format_timestamp, parse_timestamp},
    TrolixResult,
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Sandbox and session repositories backed by a SQLite database.
///
/// The table's integer `row_id` is internal to the store and never leaves this module.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SqliteStore {
    /// Wraps an existing, already migrated, connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Opens the database at `db_path`, creating and migrating it as needed.
    pub async fn open(db_path: impl AsRef<Path>) -> TrolixResult<Self> {
        let pool = init_db(db_path, &SANDBOX_DB_MIGRATOR).await?;
        Ok(Self::new(pool))
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: Helpers
//--------------------------------------------------------------------------------------------------

fn sandbox_from_row(row: &SqliteRow) -> TrolixResult<SandboxRecord> {
    Ok(SandboxRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        os_type: row.try_get("os_type")?,
        status: row.try_get::<String, _>("status")?.parse()?,
        cpu_cores: row.try_get("cpu_cores")?,
        ram_gb: row.try_get("ram_gb")?,
        disk_gb: row.try_get("disk_gb")?,
        network_isolated: row.try_get("network_isolated")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        last_accessed: parse_timestamp(&row.try_get::<String, _>("last_accessed")?)?,
        uptime: row.try_get("uptime")?,
    })
}

fn entry_from_row(row: &SqliteRow) -> TrolixResult<CommandLogEntry> {
    Ok(CommandLogEntry {
        sandbox_id: row.try_get("sandbox_id")?,
        command: row.try_get("command")?,
        output: row.try_get("output")?,
        timestamp: parse_timestamp(&row.try_get::<String, _>("timestamp")?)?,
    })
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

#[async_trait]
impl SandboxRepository for SqliteStore {
    async fn insert(&self, record: &SandboxRecord) -> TrolixResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sandboxes (
                id, name, os_type, status,
                cpu_cores, ram_gb, disk_gb, network_isolated,
                created_at, last_accessed, uptime
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.os_type)
        .bind(record.status.as_str())
        .bind(record.cpu_cores)
        .bind(record.ram_gb)
        .bind(record.disk_gb)
        .bind(record.network_isolated)
        .bind(format_timestamp(&record.created_at))
        .bind(format_timestamp(&record.last_accessed))
        .bind(record.uptime)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> TrolixResult<Vec<SandboxRecord>> {
        let rows = sqlx::query("SELECT * FROM sandboxes ORDER BY row_id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(sandbox_from_row).collect()
    }

    async fn find_by_id(&self, id: &str) -> TrolixResult<Option<SandboxRecord>> {
        let row = sqlx::query("SELECT * FROM sandboxes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(sandbox_from_row).transpose()
    }

    async fn update(&self, id: &str, update: &SandboxUpdate) -> TrolixResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE sandboxes
            SET status = ?, last_accessed = COALESCE(?, last_accessed)
            WHERE id = ?
            "#,
        )
        .bind(update.status.as_str())
        .bind(update.last_accessed.as_ref().map(format_timestamp))
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> TrolixResult<u64> {
        let result = sqlx::query("DELETE FROM sandboxes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl SessionRepository for SqliteStore {
    async fn append(&self, entry: &CommandLogEntry) -> TrolixResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (sandbox_id, command, output, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entry.sandbox_id)
        .bind(&entry.command)
        .bind(&entry.output)
        .bind(format_timestamp(&entry.timestamp))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_sandbox(&self, sandbox_id: &str) -> TrolixResult<Vec<CommandLogEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT sandbox_id, command, output, timestamp
            FROM sessions
            WHERE sandbox_id = ?
            ORDER BY timestamp ASC, row_id ASC
            "#,
        )
        .bind(sandbox_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::management::models::{SandboxConfig, SandboxStatus};

    async fn open_temp_store() -> TrolixResult<(tempfile::TempDir, SqliteStore)> {
        let temp_dir = tempdir()?;
        let store = SqliteStore::open(temp_dir.path().join("store.db")).await?;
        Ok((temp_dir, store))
    }

    fn record(id: &str, name: &str) -> SandboxRecord {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        SandboxRecord::new(id, SandboxConfig::new(name, "kali"), now)
    }

    #[tokio::test]
    async fn test_insert_and_find() -> TrolixResult<()> {
        let (_dir, store) = open_temp_store().await?;
        let first = record("a", "first");
        let second = SandboxRecord {
            network_isolated: false,
            cpu_cores: -1,
            ..record("b", "second")
        };

        store.insert(&first).await?;
        store.insert(&second).await?;

        assert_eq!(store.find_all().await?, vec![first.clone(), second.clone()]);
        assert_eq!(store.find_by_id("b").await?, Some(second));
        assert_eq!(store.find_by_id("missing").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_counts_matches() -> TrolixResult<()> {
        let (_dir, store) = open_temp_store().await?;
        let original = record("a", "first");
        store.insert(&original).await?;

        let stopped = SandboxUpdate::status(SandboxStatus::Stopped);
        assert_eq!(store.update("a", &stopped).await?, 1);
        // Same value again still counts as a match.
        assert_eq!(store.update("a", &stopped).await?, 1);
        assert_eq!(store.update("missing", &stopped).await?, 0);

        let found = store.find_by_id("a").await?.unwrap();
        assert_eq!(found.status, SandboxStatus::Stopped);
        assert_eq!(found.last_accessed, original.last_accessed);

        let later = original.last_accessed + Duration::minutes(5);
        let started = SandboxUpdate::status_touched(SandboxStatus::Running, later);
        assert_eq!(store.update("a", &started).await?, 1);

        let found = store.find_by_id("a").await?.unwrap();
        assert_eq!(found.status, SandboxStatus::Running);
        assert_eq!(found.last_accessed, later);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete() -> TrolixResult<()> {
        let (_dir, store) = open_temp_store().await?;
        store.insert(&record("a", "first")).await?;

        assert_eq!(store.delete("a").await?, 1);
        assert_eq!(store.delete("a").await?, 0);
        assert!(store.find_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_sessions_sorted_by_timestamp() -> TrolixResult<()> {
        let (_dir, store) = open_temp_store().await?;
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let entry = |command: &str, offset: i64| CommandLogEntry {
            sandbox_id: "a".to_string(),
            command: command.to_string(),
            output: String::new(),
            timestamp: base + Duration::seconds(offset),
        };

        store.append(&entry("third", 20)).await?;
        store.append(&entry("first", 0)).await?;
        store.append(&entry("second", 10)).await?;
        store.append(&entry("second-tie", 10)).await?;
        store
            .append(&CommandLogEntry {
                sandbox_id: "other".to_string(),
                ..entry("elsewhere", 5)
            })
            .await?;

        let commands: Vec<String> = store
            .find_by_sandbox("a")
            .await?
            .into_iter()
            .map(|e| e.command)
            .collect();
        assert_eq!(commands, ["first", "second", "second-tie", "third"]);
        assert!(store.find_by_sandbox("nobody").await?.is_empty());

        Ok(())
    }
}
