use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {0}")]
    Bind(#[source] std::io::Error),

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result alias for server startup and shutdown paths
pub type Result<T> = std::result::Result<T, ServerError>;
