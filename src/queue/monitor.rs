//! Monitor Loop Control Channels
//!
//! The supervising pipeline drives each queue's monitor loop through three
//! independent signals: a one-shot counter reset, a one-shot shutdown
//! request, and an outward stats sink. The control half is handed to the
//! queue's monitor task; the handle half stays with the supervisor.
//!
//! Stats publication is "latest wins": the sink is a bounded channel and
//! per-tick snapshots that find it full are dropped rather than queued, so
//! an inattentive supervisor never causes unbounded memory growth. The one
//! exception is the final flush on shutdown, which blocks until delivered.

use std::time::Duration;
use tokio::sync::mpsc;

/// Default pause between monitor loop iterations
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Signal capacity for the reset and shutdown channels
///
/// Both signals are one-shot per cycle; a single pending slot is enough.
const SIGNAL_CAPACITY: usize = 1;

/// Control half of the monitor plumbing, consumed by the queue's
/// monitor task
pub struct MonitorControl {
    pub(crate) reset_rx: mpsc::Receiver<()>,
    pub(crate) shutdown_rx: mpsc::Receiver<()>,
    pub(crate) stats_tx: mpsc::Sender<String>,
    pub(crate) poll_interval: Duration,
}

/// Supervisor half of the monitor plumbing
///
/// Dropping the handle closes all three channels; the monitor loop
/// treats a closed shutdown channel as a shutdown request.
pub struct MonitorHandle {
    reset_tx: mpsc::Sender<()>,
    shutdown_tx: mpsc::Sender<()>,
    stats_rx: mpsc::Receiver<String>,
}

impl MonitorControl {
    /// Create a linked control/handle pair with the default poll interval
    pub fn new() -> (MonitorControl, MonitorHandle) {
        Self::with_poll_interval(DEFAULT_POLL_INTERVAL)
    }

    /// Create a linked control/handle pair with an explicit poll interval
    pub fn with_poll_interval(poll_interval: Duration) -> (MonitorControl, MonitorHandle) {
        let (reset_tx, reset_rx) = mpsc::channel(SIGNAL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(SIGNAL_CAPACITY);
        let (stats_tx, stats_rx) = mpsc::channel(SIGNAL_CAPACITY);

        let control = MonitorControl {
            reset_rx,
            shutdown_rx,
            stats_tx,
            poll_interval,
        };
        let handle = MonitorHandle {
            reset_tx,
            shutdown_tx,
            stats_rx,
        };

        (control, handle)
    }
}

impl MonitorHandle {
    /// Request a one-shot counter reset
    ///
    /// Observed on the monitor loop's next poll cycle. A reset already
    /// pending is not an error; the requests coalesce.
    pub fn request_reset(&self) {
        let _ = self.reset_tx.try_send(());
    }

    /// Request monitor loop termination
    ///
    /// Observed on the next poll cycle; the loop then performs its final
    /// blocking stats flush and exits.
    pub fn request_shutdown(&self) {
        let _ = self.shutdown_tx.try_send(());
    }

    /// Receive the next published stats snapshot
    ///
    /// Returns `None` once the monitor loop has exited and delivered its
    /// final snapshot.
    pub async fn recv_snapshot(&mut self) -> Option<String> {
        self.stats_rx.recv().await
    }

    /// Non-blocking snapshot poll
    pub fn try_recv_snapshot(&mut self) -> Option<String> {
        self.stats_rx.try_recv().ok()
    }
}
