//! Management components for the trolix sandbox service.
//!
//! This covers the persisted models, the repository interface and its SQLite
//! and in-memory implementations, and the [`SandboxService`] operations built
//! on top of them.

mod db;
mod memstore;
mod sandbox;
mod sqlite;
mod store;
mod terminal;

pub mod models;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use db::*;
pub use memstore::*;
pub use sandbox::*;
pub use sqlite::*;
pub use store::*;
pub use terminal::*;
