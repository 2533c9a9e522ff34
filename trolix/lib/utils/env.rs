use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use crate::{
    config::{StoreKind, DEFAULT_TROLIX_HOME},
    TrolixError, TrolixResult,
};

use super::TROLIX_DB_FILENAME;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Environment variable for the trolix home directory.
pub const TROLIX_HOME_ENV_VAR: &str = "TROLIX_HOME";

/// Environment variable for the sandbox database path.
pub const TROLIX_DB_PATH_ENV_VAR: &str = "TROLIX_DB_PATH";

/// Environment variable for the server port.
pub const TROLIX_PORT_ENV_VAR: &str = "TROLIX_PORT";

/// Environment variable selecting the backing store, `sqlite` or `memory`.
pub const TROLIX_STORE_ENV_VAR: &str = "TROLIX_STORE";

/// Environment variable for the rolling log directory.
pub const TROLIX_LOG_DIR_ENV_VAR: &str = "TROLIX_LOG_DIR";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns the trolix home directory, honoring `TROLIX_HOME` when set.
pub fn get_trolix_home_path() -> PathBuf {
    match env::var(TROLIX_HOME_ENV_VAR) {
        Ok(home) if !home.is_empty() => PathBuf::from(home),
        _ => DEFAULT_TROLIX_HOME.clone(),
    }
}

/// Returns the sandbox database path, honoring `TROLIX_DB_PATH` when set.
pub fn get_trolix_db_path() -> PathBuf {
    match env::var(TROLIX_DB_PATH_ENV_VAR) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_trolix_home_path().join(TROLIX_DB_FILENAME),
    }
}

/// Returns the server port from `TROLIX_PORT`, if set.
///
/// A value that is not a port number is an error rather than being ignored.
pub fn get_env_port() -> TrolixResult<Option<u16>> {
    parse_env_value(TROLIX_PORT_ENV_VAR, env::var(TROLIX_PORT_ENV_VAR).ok())
}

/// Returns the store selected by `TROLIX_STORE`, if set.
pub fn get_env_store() -> TrolixResult<Option<StoreKind>> {
    parse_env_value(TROLIX_STORE_ENV_VAR, env::var(TROLIX_STORE_ENV_VAR).ok())
}

/// Returns the rolling log directory from `TROLIX_LOG_DIR`, if set.
pub fn get_env_log_dir() -> Option<PathBuf> {
    env::var(TROLIX_LOG_DIR_ENV_VAR)
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

fn parse_env_value<T>(name: &str, value: Option<String>) -> TrolixResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(value) if !value.is_empty() => value.parse().map(Some).map_err(|e| {
            TrolixError::InvalidArgument(format!("invalid {name} value {value:?}: {e}"))
        }),
        _ => Ok(None),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_port() -> TrolixResult<()> {
        assert_eq!(
            parse_env_value::<u16>(TROLIX_PORT_ENV_VAR, Some("9001".into()))?,
            Some(9001)
        );
        assert_eq!(parse_env_value::<u16>(TROLIX_PORT_ENV_VAR, None)?, None);
        assert_eq!(parse_env_value::<u16>(TROLIX_PORT_ENV_VAR, Some(String::new()))?, None);
        Ok(())
    }

    #[test]
    fn test_invalid_env_port_is_an_error() {
        for value in ["80o1", "70000", "-1"] {
            let err = parse_env_value::<u16>(TROLIX_PORT_ENV_VAR, Some(value.into())).unwrap_err();
            assert!(matches!(err, TrolixError::InvalidArgument(_)), "{value}");
            assert!(err.to_string().contains(TROLIX_PORT_ENV_VAR));
            assert!(err.to_string().contains(value));
        }
    }

    #[test]
    fn test_parse_env_store() -> TrolixResult<()> {
        assert_eq!(
            parse_env_value::<StoreKind>(TROLIX_STORE_ENV_VAR, Some("Memory".into()))?,
            Some(StoreKind::Memory)
        );
        let err = parse_env_value::<StoreKind>(TROLIX_STORE_ENV_VAR, Some("mongo".into()))
            .unwrap_err();
        assert!(matches!(err, TrolixError::InvalidArgument(_)));
        Ok(())
    }
}
