use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// No series with the requested identifier
    #[error("Series {0} not found")]
    NotFound(i64),

    /// Entered fields were rejected
    #[error("Invalid series: {0}")]
    Invalid(#[from] shelf_lib::DraftError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

impl From<shelf_lib::GatewayError> for CliError {
    fn from(e: shelf_lib::GatewayError) -> Self {
        match e {
            shelf_lib::GatewayError::Operation(shelf_db::OperationError::NotFound { id }) => {
                Self::NotFound(id)
            }
            other => Self::database(other.to_string()),
        }
    }
}

impl From<shelf_lib::BrowseError> for CliError {
    fn from(e: shelf_lib::BrowseError) -> Self {
        match e {
            shelf_lib::BrowseError::Gateway(inner) => inner.into(),
            other => Self::runtime(other.to_string()),
        }
    }
}
