use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    sync::LazyLock,
    time::Duration,
};

use crate::utils::TROLIX_HOME_DIR;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The name the service reports on the health endpoint.
pub const SERVICE_NAME: &str = "TrolixVE";

/// The prefix all HTTP routes are mounted under.
pub const API_PREFIX: &str = "/api";

/// Default address for the HTTP server to bind to.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default port for the HTTP server.
pub const DEFAULT_SERVER_PORT: u16 = 8001;

/// How long a new sandbox stays in the `creating` state before it is marked `running`.
pub const DEFAULT_PROVISION_DELAY: Duration = Duration::from_secs(2);

/// The default number of CPU cores recorded for a new sandbox.
pub const DEFAULT_CPU_CORES: i64 = 2;

/// The default amount of RAM in GiB recorded for a new sandbox.
pub const DEFAULT_RAM_GB: i64 = 4;

/// The default disk size in GiB recorded for a new sandbox.
pub const DEFAULT_DISK_GB: i64 = 20;

/// Whether new sandboxes are marked network isolated by default.
pub const DEFAULT_NETWORK_ISOLATED: bool = true;

/// The path where all trolix global data is stored.
pub static DEFAULT_TROLIX_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(TROLIX_HOME_DIR)
});
