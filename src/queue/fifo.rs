//! FIFO queue implementation
//!
//! `FifoQueue` wraps the item store and stats ledger behind a single
//! mutual-exclusion lock and owns the queue lifecycle. Every contract
//! operation holds the lock for its full duration and performs only O(1)
//! list/counter work under it, so contention windows stay short; config
//! file I/O happens before the lock is taken.
//!
//! Lifecycle is a one-way state machine: `Unconfigured → Ready → Closed`.
//! Two-phase construction (`allocate` then `configure`) lets a supervisor
//! register the handle in its queue registry before configuration
//! completes; `new` collapses both steps for callers that don't need that.

use crate::queue::config::FifoConfig;
use crate::queue::error::{FifoError, FifoResult};
use crate::queue::monitor::MonitorControl;
use crate::queue::stats::FifoStats;
use crate::queue::store::ItemStore;
use crate::queue::traits::{Queue, UNBOUNDED_CAPACITY};
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::mpsc::error::TryRecvError;

/// Queue lifecycle state
///
/// Transitions are monotonic: a queue is configured at most once and
/// closed at most once, after which it is permanently inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueState {
    Unconfigured,
    Ready,
    Closed,
}

#[derive(Debug)]
struct Inner<T> {
    store: ItemStore<T>,
    stats: FifoStats,
    state: QueueState,
}

/// Thread-safe unbounded FIFO queue with a stats ledger
///
/// Producers and consumers share the queue via `Arc<FifoQueue<T>>` (or
/// `Arc<dyn Queue<T>>`); all operations synchronise on one internal lock.
///
/// # Example
///
/// ```rust,no_run
/// use fifoq::queue::api::{FifoQueue, Queue};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let queue = FifoQueue::allocate();
/// queue.configure(None)?;
///
/// queue.put("x")?;
/// assert_eq!(queue.peek()?, Some("x"));
/// assert_eq!(queue.get()?, Some("x"));
/// assert_eq!(queue.get()?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FifoQueue<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> FifoQueue<T>
where
    T: Clone + Send + 'static,
{
    /// Allocate an unconfigured queue handle
    ///
    /// The handle can live in a supervisor's registry before
    /// configuration; `put`/`get`/`peek` are rejected until
    /// [`configure`](Self::configure) succeeds.
    pub fn allocate() -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: ItemStore::new(),
                stats: FifoStats::new(crate::queue::config::DEFAULT_QUEUE_NAME.to_string()),
                state: QueueState::Unconfigured,
            }),
        }
    }

    /// Configure the queue from an optional JSON config file
    ///
    /// `None` applies the default configuration. Succeeds at most once;
    /// the name is immutable afterwards.
    pub fn configure(&self, config_path: Option<&Path>) -> FifoResult<()> {
        // File I/O stays outside the lock
        let config = FifoConfig::load(config_path)?;

        let mut inner = self.inner.lock().unwrap();
        match inner.state {
            QueueState::Unconfigured => {
                inner.stats.name = config.name;
                inner.state = QueueState::Ready;
                Ok(())
            }
            QueueState::Ready => Err(FifoError::AlreadyConfigured {
                name: inner.stats.name.clone(),
            }),
            QueueState::Closed => Err(FifoError::Closed),
        }
    }

    /// Single-step construction: allocate and configure
    pub fn new(config_path: Option<&Path>) -> FifoResult<Self> {
        let queue = Self::allocate();
        queue.configure(config_path)?;
        Ok(queue)
    }

    /// Construct a ready queue from an in-memory configuration
    pub fn with_config(config: FifoConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: ItemStore::new(),
                stats: FifoStats::new(config.name),
                state: QueueState::Ready,
            }),
        }
    }

    /// Reset the stats ledger counters to zero
    ///
    /// Leaves the item store, lifecycle state, queue name, and the
    /// `closed`/`monitoring` flags untouched. Normally driven by the
    /// monitor loop's reset signal.
    pub fn clear_stats(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.stats.reset();
    }

    /// Take a snapshot of the ledger, recording the monitoring flag
    fn snapshot(&self, monitoring: bool) -> FifoStats {
        let mut inner = self.inner.lock().unwrap();
        inner.stats.monitoring = monitoring;
        inner.stats.clone()
    }
}

#[async_trait::async_trait]
impl<T> Queue<T> for FifoQueue<T>
where
    T: Clone + Send + 'static,
{
    fn name(&self) -> String {
        self.inner.lock().unwrap().stats.name.clone()
    }

    fn put(&self, item: T) -> FifoResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.state {
            QueueState::Unconfigured => Err(FifoError::Unconfigured),
            QueueState::Closed => Err(FifoError::Closed),
            QueueState::Ready => {
                inner.store.push(item);
                // Count only successful enqueues so sent <= received
                // holds under concurrent close
                inner.stats.messages_received += 1;
                Ok(())
            }
        }
    }

    fn get(&self) -> FifoResult<Option<T>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.state {
            QueueState::Unconfigured => Err(FifoError::Unconfigured),
            QueueState::Closed => Err(FifoError::Closed),
            QueueState::Ready => match inner.store.pop() {
                Some(item) => {
                    inner.stats.messages_sent += 1;
                    Ok(Some(item))
                }
                None => Ok(None),
            },
        }
    }

    fn peek(&self) -> FifoResult<Option<T>> {
        let inner = self.inner.lock().unwrap();
        match inner.state {
            QueueState::Unconfigured => Err(FifoError::Unconfigured),
            QueueState::Closed => Err(FifoError::Closed),
            QueueState::Ready => Ok(inner.store.head().cloned()),
        }
    }

    fn len(&self) -> usize {
        let mut inner = self.inner.lock().unwrap();
        let count = inner.store.len();
        inner.stats.length = count as u64;
        count
    }

    fn capacity(&self) -> isize {
        UNBOUNDED_CAPACITY
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.store.release();
    }

    fn closed(&self) -> bool {
        self.inner.lock().unwrap().state == QueueState::Closed
    }

    fn close(&self) -> FifoResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.state = QueueState::Closed;
        inner.store.release();
        inner.stats.closed = true;
        Ok(())
    }

    fn stats(&self) -> FifoStats {
        self.inner.lock().unwrap().stats.clone()
    }

    /// Monitor protocol: each tick services a pending reset, publishes a
    /// non-blocking snapshot, then checks for shutdown. On exit the
    /// terminal snapshot (`monitoring = false`) is flushed exactly once,
    /// blocking until the supervisor takes it.
    async fn monitor(&self, mut control: MonitorControl) {
        loop {
            if control.reset_rx.try_recv().is_ok() {
                self.clear_stats();
            }

            let snapshot = self.snapshot(true);
            match serde_json::to_string(&snapshot) {
                // Latest wins: a full sink drops this cycle's snapshot
                Ok(encoded) => {
                    let _ = control.stats_tx.try_send(encoded);
                }
                Err(err) => {
                    log::warn!(
                        "queue '{}': skipping stats publish, snapshot failed to encode: {}",
                        snapshot.name,
                        err
                    );
                }
            }

            match control.shutdown_rx.try_recv() {
                Ok(()) => break,
                // A dropped supervisor handle is an implicit shutdown
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            tokio::time::sleep(control.poll_interval).await;
        }

        let terminal = self.snapshot(false);
        match serde_json::to_string(&terminal) {
            Ok(encoded) => {
                if control.stats_tx.send(encoded).await.is_err() {
                    log::warn!(
                        "queue '{}': stats sink closed before the final flush",
                        terminal.name
                    );
                }
            }
            Err(err) => {
                log::error!(
                    "queue '{}': final stats snapshot failed to encode: {}",
                    terminal.name,
                    err
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::config::DEFAULT_QUEUE_NAME;

    #[test]
    fn test_allocate_starts_unconfigured() {
        let queue: FifoQueue<String> = FifoQueue::allocate();

        assert_eq!(queue.name(), DEFAULT_QUEUE_NAME);
        assert!(!queue.closed());
        assert!(matches!(
            queue.put("x".to_string()),
            Err(FifoError::Unconfigured)
        ));
        assert!(matches!(queue.get(), Err(FifoError::Unconfigured)));
        assert!(matches!(queue.peek(), Err(FifoError::Unconfigured)));
    }

    #[test]
    fn test_configure_transitions_to_ready() {
        let queue: FifoQueue<String> = FifoQueue::allocate();
        queue.configure(None).unwrap();

        assert_eq!(queue.name(), DEFAULT_QUEUE_NAME);
        queue.put("x".to_string()).unwrap();
        assert_eq!(queue.get().unwrap(), Some("x".to_string()));
    }

    #[test]
    fn test_configure_twice_is_rejected() {
        let queue: FifoQueue<String> = FifoQueue::allocate();
        queue.configure(None).unwrap();

        match queue.configure(None) {
            Err(FifoError::AlreadyConfigured { name }) => {
                assert_eq!(name, DEFAULT_QUEUE_NAME);
            }
            other => panic!("Expected AlreadyConfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_configure_after_close_is_rejected() {
        let queue: FifoQueue<String> = FifoQueue::allocate();
        queue.close().unwrap();

        assert!(matches!(queue.configure(None), Err(FifoError::Closed)));
    }

    #[test]
    fn test_with_config_is_immediately_ready() {
        let queue: FifoQueue<u32> = FifoQueue::with_config(FifoConfig {
            name: "stage.transform".to_string(),
        });

        assert_eq!(queue.name(), "stage.transform");
        queue.put(1).unwrap();
        assert_eq!(queue.get().unwrap(), Some(1));
    }

    #[test]
    fn test_capacity_is_unbounded_sentinel() {
        let queue: FifoQueue<u32> = FifoQueue::new(None).unwrap();
        assert_eq!(queue.capacity(), UNBOUNDED_CAPACITY);
    }
}
