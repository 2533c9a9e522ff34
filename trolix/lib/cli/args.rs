use std::{net::IpAddr, path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    config::{ServerConfig, StoreKind, DEFAULT_HOST, DEFAULT_PROVISION_DELAY, DEFAULT_SERVER_PORT},
    utils, TrolixResult,
};

//-------------------------------------------------------------------------------------------------
// Types
//-------------------------------------------------------------------------------------------------

/// Trolix - a mock backend for simulated virtual sandboxes
#[derive(Debug, Parser)]
#[command(name = "trolix", author, about, version)]
pub struct TrolixArgs {
    /// The subcommand to run
    #[command(subcommand)]
    pub subcommand: Option<TrolixSubcommand>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Debug, Parser)]
pub enum TrolixSubcommand {
    /// Start the sandbox API server
    #[command(name = "serve")]
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on [env: TROLIX_PORT]
        #[arg(short, long)]
        port: Option<u16>,

        /// Path of the SQLite database [env: TROLIX_DB_PATH]
        #[arg(long)]
        db_path: Option<PathBuf>,

        /// Backing store, `sqlite` or `memory` [env: TROLIX_STORE]
        #[arg(long)]
        store: Option<StoreKind>,

        /// Keep everything in memory instead of SQLite, same as `--store memory`
        #[arg(long, conflicts_with_all = ["db_path", "store"])]
        in_memory: bool,

        /// Simulated provisioning delay for new sandboxes, in milliseconds
        #[arg(long)]
        provision_delay_ms: Option<u64>,

        /// Directory for rolling log files [env: TROLIX_LOG_DIR]
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
}

//-------------------------------------------------------------------------------------------------
// Methods
//-------------------------------------------------------------------------------------------------

impl TrolixSubcommand {
    /// Resolves the server configuration from flags first, then environment, then defaults.
    ///
    /// Environment values that do not parse are reported as errors.
    pub fn server_config(&self) -> TrolixResult<ServerConfig> {
        match self {
            TrolixSubcommand::Serve {
                host,
                port,
                db_path,
                store,
                in_memory,
                provision_delay_ms,
                log_dir,
            } => {
                let port = match port {
                    Some(port) => *port,
                    None => utils::get_env_port()?.unwrap_or(DEFAULT_SERVER_PORT),
                };
                let store = match (in_memory, store) {
                    (true, _) => StoreKind::Memory,
                    (false, Some(store)) => *store,
                    (false, None) => utils::get_env_store()?.unwrap_or_default(),
                };

                let config = ServerConfig::builder()
                    .host(host.unwrap_or(DEFAULT_HOST))
                    .port(port)
                    .db_path(db_path.clone().unwrap_or_else(utils::get_trolix_db_path))
                    .store(store)
                    .provision_delay(
                        provision_delay_ms
                            .map(Duration::from_millis)
                            .unwrap_or(DEFAULT_PROVISION_DELAY),
                    );

                Ok(match log_dir.clone().or_else(utils::get_env_log_dir) {
                    Some(dir) => config.log_dir(dir).build(),
                    None => config.build(),
                })
            }
        }
    }
}

//-------------------------------------------------------------------------------------------------
// Tests
//-------------------------------------------------------------------------------------------------
