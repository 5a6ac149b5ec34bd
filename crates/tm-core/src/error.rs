use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or querying a world dataset.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The dataset file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the schema.
    #[error("invalid world data: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed but is internally inconsistent.
    #[error("world validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The requested room identifier does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(String),
}
