//! `trolix` is a mock backend for a simulated virtual sandbox product.
//!
//! # Overview
//!
//! Sandboxes here are records, not machines. The crate lets a client:
//! - create named sandbox records and toggle their status
//! - send terminal-like commands that return canned output
//! - read back the per-sandbox command history
//! - list a static catalog of operating system templates
//!
//! Nothing is executed, isolated or accounted for. The resource fields on a
//! sandbox are descriptive only.
//!
//! # Architecture
//!
//! - **Management**: the [`management::SandboxService`] and the repository
//!   traits it is written against, with SQLite and in-memory stores
//! - **Simulator**: the ordered command table behind terminal execution
//! - **Catalog**: the static OS template descriptors
//! - **Server**: the axum REST API mounted under `/api`
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use trolix::management::{models::SandboxConfig, SandboxService};
//!
//! #[tokio::main]
//! async fn main() -> trolix::TrolixResult<()> {
//!     let service = SandboxService::in_memory();
//!     let id = service.create(SandboxConfig::new("lab", "kali")).await?;
//!
//!     let outcome = service.execute(&id, "whoami").await?;
//!     assert_eq!(outcome.output, "root");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - OS template catalog
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Server configuration and defaults
//! - [`management`] - Sandbox registry, terminal and history operations
//! - [`server`] - REST API server implementation
//! - [`simulator`] - Terminal command simulation
//! - [`utils`] - Common utilities and helpers

#![warn(missing_docs)]

mod error;
mod log;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod simulator;
pub mod utils;

pub use error::*;
pub use log::*;
