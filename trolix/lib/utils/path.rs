//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The directory under the user's home where trolix data is stored.
pub const TROLIX_HOME_DIR: &str = ".trolix";

/// The filename of the sandbox database.
pub const TROLIX_DB_FILENAME: &str = "trolix.db";

/// The filename prefix of rolling server log files.
pub const SERVER_LOG_PREFIX: &str = "trolix.log";
