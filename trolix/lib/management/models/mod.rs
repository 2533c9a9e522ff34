//! Models for trolix management.
//!
//! This module contains the records persisted by the sandbox registry and the
//! terminal session log, plus the request shapes that create them.

mod sandbox;
mod session;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use sandbox::*;
pub use session::*;
