use std::{
    fmt::{self, Display},
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use getset::{CopyGetters, Getters};
use typed_builder::TypedBuilder;

use crate::{utils, TrolixError};

use super::{DEFAULT_HOST, DEFAULT_PROVISION_DELAY, DEFAULT_SERVER_PORT};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Which backing store the server keeps sandbox records and command logs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// A SQLite database file on disk.
    #[default]
    Sqlite,

    /// In-process collections that vanish when the server exits.
    Memory,
}

/// Runtime configuration for the sandbox server.
///
/// Values are resolved by the binary from command line flags first, then
/// environment variables, then the defaults in [`crate::config`].
#[derive(Debug, Clone, TypedBuilder, Getters, CopyGetters)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[builder(default = DEFAULT_HOST)]
    #[getset(get_copy = "pub with_prefix")]
    host: IpAddr,

    /// Port to bind the HTTP listener to.
    #[builder(default = DEFAULT_SERVER_PORT)]
    #[getset(get_copy = "pub with_prefix")]
    port: u16,

    /// Path of the SQLite database file.
    #[builder(default = utils::get_trolix_db_path())]
    #[getset(get = "pub with_prefix")]
    db_path: PathBuf,

    /// Backing store selection.
    #[builder(default)]
    #[getset(get_copy = "pub with_prefix")]
    store: StoreKind,

    /// Simulated provisioning delay applied by create.
    #[builder(default = DEFAULT_PROVISION_DELAY)]
    #[getset(get_copy = "pub with_prefix")]
    provision_delay: Duration,

    /// Directory for rolling log files, if file logging is enabled.
    #[builder(default, setter(strip_option))]
    #[getset(get = "pub with_prefix")]
    log_dir: Option<PathBuf>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ServerConfig {
    /// The socket address the server listens on.
    pub fn get_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FromStr for StoreKind {
    type Err = TrolixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            other => Err(TrolixError::InvalidArgument(format!(
                "unknown store kind: {other}"
            ))),
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sqlite => write!(f, "sqlite"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
