use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::iso8601;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// One command submitted to a sandbox terminal together with its simulated output.
///
/// Entries are append-only and are kept after their sandbox is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    /// The sandbox the command was sent to.
    pub sandbox_id: String,

    /// The command exactly as submitted.
    pub command: String,

    /// The simulated output.
    pub output: String,

    /// When the entry was recorded.
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}
