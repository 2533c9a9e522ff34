use std::{
    fmt::{self, Display},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    config::{DEFAULT_CPU_CORES, DEFAULT_DISK_GB, DEFAULT_NETWORK_ISOLATED, DEFAULT_RAM_GB},
    utils::iso8601,
    TrolixError,
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A sandbox is a stored record standing in for a virtual machine.
///
/// Nothing is provisioned for it. The resource fields are descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxRecord {
    /// Unique identifier assigned at creation.
    pub id: String,

    /// User-supplied label. Not required to be unique.
    pub name: String,

    /// Free-form operating system key.
    pub os_type: String,

    /// The current status label.
    pub status: SandboxStatus,

    /// Number of CPU cores.
    pub cpu_cores: i64,

    /// RAM in GiB.
    pub ram_gb: i64,

    /// Disk size in GiB.
    pub disk_gb: i64,

    /// Whether the sandbox is marked network isolated.
    pub network_isolated: bool,

    /// When the sandbox was created.
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,

    /// When the sandbox was last started or created.
    #[serde(with = "iso8601")]
    pub last_accessed: DateTime<Utc>,

    /// Always zero.
    pub uptime: i64,
}

/// The status label of a sandbox.
///
/// Any status may be overwritten by any other. There is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SandboxStatus {
    /// Inserted but not yet past the provisioning delay.
    Creating,

    /// Started.
    Running,

    /// Stopped.
    Stopped,

    /// Saved.
    Saved,
}

/// Request body for creating a sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Label for the new sandbox.
    pub name: String,

    /// Operating system key. Not checked against the template catalog.
    pub os_type: String,

    /// Number of CPU cores.
    #[serde(default = "default_cpu_cores")]
    pub cpu_cores: i64,

    /// RAM in GiB.
    #[serde(default = "default_ram_gb")]
    pub ram_gb: i64,

    /// Disk size in GiB.
    #[serde(default = "default_disk_gb")]
    pub disk_gb: i64,

    /// Whether the sandbox is marked network isolated.
    #[serde(default = "default_network_isolated")]
    pub network_isolated: bool,
}

/// A partial update applied to a stored sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxUpdate {
    /// The status to overwrite with.
    pub status: SandboxStatus,

    /// A new last-accessed time, if it should be refreshed.
    pub last_accessed: Option<DateTime<Utc>>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SandboxRecord {
    /// Builds a fresh record in the `creating` state from a create request.
    pub fn new(id: impl Into<String>, config: SandboxConfig, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: config.name,
            os_type: config.os_type,
            status: SandboxStatus::Creating,
            cpu_cores: config.cpu_cores,
            ram_gb: config.ram_gb,
            disk_gb: config.disk_gb,
            network_isolated: config.network_isolated,
            created_at: now,
            last_accessed: now,
            uptime: 0,
        }
    }

    /// Applies an update in place.
    pub fn apply(&mut self, update: &SandboxUpdate) {
        self.status = update.status;
        if let Some(last_accessed) = update.last_accessed {
            self.last_accessed = last_accessed;
        }
    }
}

impl SandboxStatus {
    /// The label stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SandboxStatus::Creating => "creating",
            SandboxStatus::Running => "running",
            SandboxStatus::Stopped => "stopped",
            SandboxStatus::Saved => "saved",
        }
    }
}

impl SandboxConfig {
    /// Creates a config with the default resources for the given name and OS.
    pub fn new(name: impl Into<String>, os_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            os_type: os_type.into(),
            cpu_cores: DEFAULT_CPU_CORES,
            ram_gb: DEFAULT_RAM_GB,
            disk_gb: DEFAULT_DISK_GB,
            network_isolated: DEFAULT_NETWORK_ISOLATED,
        }
    }
}

impl SandboxUpdate {
    /// Overwrites the status only.
    pub fn status(status: SandboxStatus) -> Self {
        Self {
            status,
            last_accessed: None,
        }
    }

    /// Overwrites the status and refreshes the last-accessed time.
    pub fn status_touched(status: SandboxStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            last_accessed: Some(now),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: Serde Defaults
//--------------------------------------------------------------------------------------------------

fn default_cpu_cores() -> i64 {
    DEFAULT_CPU_CORES
}

fn default_ram_gb() -> i64 {
    DEFAULT_RAM_GB
}

fn default_disk_gb() -> i64 {
    DEFAULT_DISK_GB
}

fn default_network_isolated() -> bool {
    DEFAULT_NETWORK_ISOLATED
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Display for SandboxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SandboxStatus {
    type Err = TrolixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creating" => Ok(SandboxStatus::Creating),
            "running" => Ok(SandboxStatus::Running),
            "stopped" => Ok(SandboxStatus::Stopped),
            "saved" => Ok(SandboxStatus::Saved),
            other => Err(TrolixError::InvalidStatus(other.to_string())),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_config_defaults_applied_on_deserialize() -> anyhow::Result<()> {
        let config: SandboxConfig =
            serde_json::from_value(json!({ "name": "lab", "os_type": "kali" }))?;
        assert_eq!(config, SandboxConfig::new("lab", "kali"));
        assert_eq!(config.cpu_cores, 2);
        assert_eq!(config.ram_gb, 4);
        assert_eq!(config.disk_gb, 20);
        assert!(config.network_isolated);
        Ok(())
    }

    #[test]
    fn test_config_requires_name_and_os_type() {
        assert!(serde_json::from_value::<SandboxConfig>(json!({ "name": "lab" })).is_err());
        assert!(serde_json::from_value::<SandboxConfig>(json!({ "os_type": "kali" })).is_err());
    }

    #[test]
    fn test_record_serializes_wire_shape() -> anyhow::Result<()> {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let config = SandboxConfig {
            cpu_cores: 8,
            network_isolated: false,
            ..SandboxConfig::new("box", "arch")
        };
        let record = SandboxRecord::new("id-1", config, now);

        let value = serde_json::to_value(&record)?;
        assert_eq!(
            value,
            json!({
                "id": "id-1",
                "name": "box",
                "os_type": "arch",
                "status": "creating",
                "cpu_cores": 8,
                "ram_gb": 4,
                "disk_gb": 20,
                "network_isolated": false,
                "created_at": "2025-03-01T12:00:00.000000Z",
                "last_accessed": "2025-03-01T12:00:00.000000Z",
                "uptime": 0
            })
        );

        let back: SandboxRecord = serde_json::from_value(value)?;
        assert_eq!(back, record);
        Ok(())
    }

    #[test]
    fn test_apply_update() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 3, 1, 13, 0, 0).unwrap();
        let mut record = SandboxRecord::new("id-1", SandboxConfig::new("a", "b"), created);

        record.apply(&SandboxUpdate::status(SandboxStatus::Stopped));
        assert_eq!(record.status, SandboxStatus::Stopped);
        assert_eq!(record.last_accessed, created);

        record.apply(&SandboxUpdate::status_touched(SandboxStatus::Running, later));
        assert_eq!(record.status, SandboxStatus::Running);
        assert_eq!(record.last_accessed, later);
        assert_eq!(record.created_at, created);
    }

    #[test]
    fn test_status_labels() {
        for status in [
            SandboxStatus::Creating,
            SandboxStatus::Running,
            SandboxStatus::Stopped,
            SandboxStatus::Saved,
        ] {
            assert_eq!(status.to_string().parse::<SandboxStatus>().unwrap(), status);
        }
        assert!("paused".parse::<SandboxStatus>().is_err());
    }
}
