use thiserror::Error;

// Error type for route queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A query ran before a graph was supplied.
    #[error("Route provider is not initialized.")]
    NotInitialized,

    /// The query arguments themselves are unusable.
    #[error("Invalid parameter: {0}")]
    InvalidInput(String),

    /// A town name that is not an uppercase letter in the supported range.
    #[error("Invalid town name: {0}")]
    InvalidTown(char),

    /// A valid town name with no location in the graph.
    #[error("Unknown town: {0}")]
    UnknownLocation(char),
}
