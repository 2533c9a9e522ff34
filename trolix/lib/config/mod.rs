//! Configuration types and defaults for the trolix server.

mod defaults;
mod server;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use defaults::*;
pub use server::*;
