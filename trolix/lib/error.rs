use std::{
    error::Error,
    fmt::{self, Display},
};
use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a trolix-related operation.
pub type TrolixResult<T> = Result<T, TrolixError>;

/// An error that occurred during a sandbox or terminal operation.
#[derive(Debug, Error)]
pub enum TrolixError {
    /// An I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An error that can represent any error.
    #[error(transparent)]
    Custom(#[from] AnyError),

    /// An error that occurred while talking to the database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An error that occurred while running database migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The referenced sandbox does not exist.
    #[error("sandbox not found: {0}")]
    SandboxNotFound(String),

    /// A stored status label is not one of the known statuses.
    #[error("invalid sandbox status: {0}")]
    InvalidStatus(String),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An invalid argument was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// An error that can represent any error.
#[derive(Debug)]
pub struct AnyError {
    error: anyhow::Error,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl TrolixError {
    /// Creates a new `Err` result.
    pub fn custom(error: impl Into<anyhow::Error>) -> TrolixError {
        TrolixError::Custom(AnyError {
            error: error.into(),
        })
    }

    /// Returns `true` if the error means the referenced sandbox is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrolixError::SandboxNotFound(_))
    }
}

impl AnyError {
    /// Downcasts the error to a `T`.
    pub fn downcast<T>(&self) -> Option<&T>
    where
        T: Display + fmt::Debug + Send + Sync + 'static,
    {
        self.error.downcast_ref::<T>()
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Creates an `Ok` `TrolixResult`.
#[allow(non_snake_case)]
pub fn Ok<T>(value: T) -> TrolixResult<T> {
    Result::Ok(value)
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl PartialEq for AnyError {
    fn eq(&self, other: &Self) -> bool {
        self.error.to_string() == other.error.to_string()
    }
}

impl Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for AnyError {}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(TrolixError::SandboxNotFound("abc".into()).is_not_found());
        assert!(!TrolixError::InvalidStatus("paused".into()).is_not_found());
        assert!(!TrolixError::custom(anyhow::anyhow!("boom")).is_not_found());
    }

    #[test]
    fn test_custom_error_downcast() {
        let err = TrolixError::custom(std::io::Error::other("disk gone"));
        match err {
            TrolixError::Custom(any) => {
                assert!(any.downcast::<std::io::Error>().is_some());
                assert_eq!(any.to_string(), "disk gone");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
