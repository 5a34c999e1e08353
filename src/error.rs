use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid grid size: {0}")]
    InvalidGridSize(String),

    #[error("Invalid domain extents: {0}")]
    InvalidExtents(String),
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidGridDimensions(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<GridError> for SolverError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidGridSize(msg) => SolverError::InvalidGridDimensions(msg),
            GridError::InvalidExtents(msg) => SolverError::InvalidParameter(msg),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
