//! Public API for the queue component
//!
//! This module provides the complete public API for the pluggable FIFO
//! queue. External modules should import from here rather than directly
//! from internal modules. See module documentation for usage examples and
//! architecture details.

// Core queue implementation
pub use crate::queue::fifo::FifoQueue;

// Capability contract exposed to the supervising pipeline
pub use crate::queue::traits::{Queue, UNBOUNDED_CAPACITY};

// Monitor loop control plumbing
pub use crate::queue::monitor::{MonitorControl, MonitorHandle, DEFAULT_POLL_INTERVAL};

// Configuration
pub use crate::queue::config::{FifoConfig, DEFAULT_QUEUE_NAME};

// Statistics
pub use crate::queue::stats::FifoStats;

// Error handling
pub use crate::queue::error::{FifoError, FifoResult};
