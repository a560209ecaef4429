//! Capability contract for pluggable queues
//!
//! The pipeline runtime loads queue implementations behind this trait and
//! never depends on anything beyond it, so implementations can be swapped
//! without changes to the surrounding stages.

use crate::queue::error::FifoResult;
use crate::queue::monitor::MonitorControl;
use crate::queue::stats::FifoStats;

/// Sentinel capacity meaning "no capacity limit"
pub const UNBOUNDED_CAPACITY: isize = -1;

/// Contract every inter-stage queue exposes to the pipeline
///
/// All operations are non-blocking with respect to data availability:
/// absence of an item is the normal `Ok(None)` outcome, never a
/// suspension point. Flow control (poll-and-sleep, backoff) is the
/// caller's responsibility.
///
/// # Example
///
/// ```rust,no_run
/// use fifoq::queue::api::{FifoQueue, Queue};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let queue: FifoQueue<String> = FifoQueue::new(None)?;
///
/// queue.put("payload".to_string())?;
/// while let Some(item) = queue.get()? {
///     println!("dequeued: {}", item);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait Queue<T>: Send + Sync
where
    T: Clone + Send + 'static,
{
    /// Configured queue identifier
    fn name(&self) -> String;

    /// Append an item at the tail
    fn put(&self, item: T) -> FifoResult<()>;

    /// Remove and return the head item
    ///
    /// An empty open queue yields `Ok(None)` so callers can poll without
    /// error-driven control flow.
    fn get(&self) -> FifoResult<Option<T>>;

    /// Return a copy of the head item without removing it
    fn peek(&self) -> FifoResult<Option<T>>;

    /// Current item count
    fn len(&self) -> usize;

    /// True when the queue holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity bound, or [`UNBOUNDED_CAPACITY`] when there is none
    fn capacity(&self) -> isize;

    /// Remove every item, leaving lifecycle state and counters alone
    fn clear(&self);

    /// Whether the queue has been closed
    fn closed(&self) -> bool;

    /// Close the queue permanently and release its items
    ///
    /// Idempotent; never fails.
    fn close(&self) -> FifoResult<()>;

    /// Consistent snapshot of the stats ledger
    fn stats(&self) -> FifoStats;

    /// Run the stats monitor protocol until a shutdown signal arrives
    ///
    /// Publishes periodic snapshots and services reset requests over the
    /// supplied control channels; guarantees one final blocking snapshot
    /// on exit. One monitor task per queue instance.
    async fn monitor(&self, control: MonitorControl);
}
