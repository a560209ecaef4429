//! Queue Configuration
//!
//! Queues are identified by a name assigned at configuration time. The name
//! comes from an optional JSON config file; when no file is given the
//! default identifier is used. A config file that exists but cannot be read
//! or parsed is a construction-time error for that queue instance.

use crate::queue::error::{FifoError, FifoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default identifier used when no config file is supplied
pub const DEFAULT_QUEUE_NAME: &str = "fifoq.queue.fifo";

/// Configuration record for a FIFO queue instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FifoConfig {
    /// Queue identifier, used for multi-queue disambiguation by the
    /// owning pipeline
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_QUEUE_NAME.to_string()
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl FifoConfig {
    /// Load configuration from an optional JSON file path
    ///
    /// `None` yields the default configuration. A path that cannot be read
    /// or parsed is fatal to construction of the queue instance.
    pub fn load(path: Option<&Path>) -> FifoResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| FifoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| FifoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
