//! Error types for banchan tag search.

use thiserror::Error;

/// Result type alias using banchan's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tag search operations.
///
/// Every variant is terminal for the request that produced it: nothing is
/// retried and no partial result is returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range path parameters.
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// The store is unreachable or the connection is unusable.
    #[error("Store connection error: {0}")]
    StoreConnection(String),

    /// The query reached the store but failed to execute.
    #[error("Store query error: {0}")]
    StoreQuery(String),

    /// The result set could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures reported by the store collaborator.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::StoreConnection(_) | Error::StoreQuery(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => Error::StoreConnection(e.to_string()),
            _ => Error::StoreQuery(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parameter() {
        let err = Error::Parameter("page index must be >= 1".to_string());
        assert_eq!(err.to_string(), "Parameter error: page index must be >= 1");
    }

    #[test]
    fn test_error_display_store_connection() {
        let err = Error::StoreConnection("refused".to_string());
        assert_eq!(err.to_string(), "Store connection error: refused");
    }

    #[test]
    fn test_error_display_store_query() {
        let err = Error::StoreQuery("relation \"tag\" does not exist".to_string());
        assert_eq!(
            err.to_string(),
            "Store query error: relation \"tag\" does not exist"
        );
    }

    #[test]
    fn test_error_display_serialization() {
        let err = Error::Serialization("invalid JSON".to_string());
        assert_eq!(err.to_string(), "Serialization error: invalid JSON");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("PORT is not a number".to_string());
        assert_eq!(err.to_string(), "Configuration error: PORT is not a number");
    }

    #[test]
    fn test_pool_timeout_is_connection_error() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::StoreConnection(_)));
        assert!(err.is_store_error());
    }

    #[test]
    fn test_pool_closed_is_connection_error() {
        let err: Error = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, Error::StoreConnection(_)));
    }

    #[test]
    fn test_io_error_is_connection_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: Error = sqlx::Error::Io(io_err).into();
        assert!(matches!(err, Error::StoreConnection(_)));
    }

    #[test]
    fn test_row_not_found_is_query_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::StoreQuery(_)));
        assert!(err.is_store_error());
    }

    #[test]
    fn test_parameter_error_is_not_store_error() {
        assert!(!Error::Parameter("bad".to_string()).is_store_error());
        assert!(!Error::Serialization("bad".to_string()).is_store_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => {
                assert!(!msg.is_empty());
            }
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
