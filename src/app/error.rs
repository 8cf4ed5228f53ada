use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Route loading error: {0}")]
    GraphLoad(#[from] crate::graph_loader::GraphLoaderError),
    #[error("Route query error: {0}")]
    Route(#[from] crate::route::RouteError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
