use shelf_db::OperationError;
use thiserror::Error;

/// Errors surfaced by a [`SeriesGateway`](crate::gateway::SeriesGateway).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The underlying database operation failed
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// A previous holder of the connection panicked
    #[error("Database connection lock poisoned")]
    Poisoned,

    /// The blocking worker running the query failed
    #[error("Background database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl GatewayError {
    /// True when the gateway reported a missing identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Operation(OperationError::NotFound { .. }))
    }
}

/// Errors returned by the browse controller.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// A gateway call failed; the controller state is left as it was
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The session was closed before the operation could finish
    #[error("Browse session closed")]
    SessionClosed,
}
