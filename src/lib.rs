//! fifoq - pluggable FIFO queue for pipeline runtimes
//!
//! Thread-safe, unbounded FIFO buffering between pipeline stages, with a
//! background monitor that publishes and resets usage statistics without
//! blocking normal traffic. See [`queue`] for the component documentation.

pub mod queue;
