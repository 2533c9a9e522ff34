//! Terminal execution and history for sandboxes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{models::CommandLogEntry, SandboxService};
use crate::{utils::iso8601, TrolixError, TrolixResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Exit code reported for every simulated command, including unknown ones.
pub const SIMULATED_EXIT_CODE: i32 = 0;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a simulated terminal command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// The command exactly as submitted.
    pub command: String,

    /// The simulated output.
    pub output: String,

    /// When the command was logged.
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,

    /// Always [`SIMULATED_EXIT_CODE`].
    pub exit_code: i32,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl SandboxService {
    /// Runs a command against the simulator and logs it to the sandbox's history.
    ///
    /// The sandbox must exist, but its status is not checked: stopped and saved
    /// sandboxes answer commands like running ones.
    pub async fn execute(&self, sandbox_id: &str, command: &str) -> TrolixResult<CommandOutcome> {
        if self.sandboxes.find_by_id(sandbox_id).await?.is_none() {
            return Err(TrolixError::SandboxNotFound(sandbox_id.to_string()));
        }

        let output = self.commands.resolve(sandbox_id, command);
        let entry = CommandLogEntry {
            sandbox_id: sandbox_id.to_string(),
            command: command.to_string(),
            output,
            timestamp: Utc::now(),
        };

        self.sessions.append(&entry).await?;
        tracing::info!("sandbox {} ran {:?}", sandbox_id, command);

        Ok(CommandOutcome {
            command: entry.command,
            output: entry.output,
            timestamp: entry.timestamp,
            exit_code: SIMULATED_EXIT_CODE,
        })
    }

    /// Returns the command history of a sandbox, oldest first.
    ///
    /// The sandbox does not have to exist. Unknown ids and deleted sandboxes
    /// return whatever entries were logged for them, possibly none.
    pub async fn history(&self, sandbox_id: &str) -> TrolixResult<Vec<CommandLogEntry>> {
        self.sessions.find_by_sandbox(sandbox_id).await
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
