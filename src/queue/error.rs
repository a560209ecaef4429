//! Queue Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FifoError {
    #[error("queue is closed")]
    Closed,

    #[error("queue is not configured")]
    Unconfigured,

    #[error("queue is already configured as '{name}'")]
    AlreadyConfigured { name: String },

    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for queue operations
pub type FifoResult<T> = Result<T, FifoError>;
