//! Pluggable FIFO Queue Component
//!
//! A thread-safe, unbounded FIFO queue used as the inter-stage buffer in a
//! data-pipeline runtime, loaded behind a small capability contract so the
//! owning pipeline can swap queue implementations without code changes.
//!
//! # Overview
//!
//! - **Non-blocking contract**: producers and consumers block only on the
//!   queue's internal lock, never on data availability; an empty queue
//!   returns `Ok(None)` for the poll idiom
//! - **One-way lifecycle**: `Unconfigured → Ready → Closed`, with two-phase
//!   construction so a supervisor can register the handle before its
//!   configuration is loaded
//! - **Stats ledger**: received/sent counters and a cached length tracked
//!   under the same lock, independently resettable
//! - **Monitor loop**: an optional background task that publishes JSON
//!   snapshots outward, services reset requests, and guarantees a final
//!   blocking flush on shutdown
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐ put          get ┌────────────┐
//! │  Producer  │───┐          ┌───│  Consumer  │
//! └────────────┘   ▼          ▼   └────────────┘
//!          ┌─────────────────────────┐
//!          │    FifoQueue (lock)     │
//!          │  ┌───────────────────┐  │
//!          │  │ ItemStore │ Stats │  │
//!          │  └───────────────────┘  │
//!          └────────────▲────────────┘
//!                       │ snapshot / reset
//!                ┌──────┴───────┐   stats-out   ┌────────────┐
//!                │ Monitor Loop │──────────────▶│ Supervisor │
//!                └──────▲───────┘               └──────┬─────┘
//!                       └── reset / shutdown ──────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use fifoq::queue::api::{FifoQueue, MonitorControl, Queue};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let queue = Arc::new(FifoQueue::new(None)?);
//!
//! // Normal traffic
//! queue.put("item".to_string())?;
//! let item = queue.get()?;
//!
//! // Background monitoring
//! let (control, mut handle) = MonitorControl::new();
//! let monitored = Arc::clone(&queue);
//! let task = tokio::spawn(async move { monitored.monitor(control).await });
//!
//! handle.request_shutdown();
//! while let Some(snapshot) = handle.recv_snapshot().await {
//!     println!("stats: {}", snapshot);
//! }
//! task.await?;
//!
//! queue.close()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
mod config;
mod error;
mod fifo;
mod monitor;
mod stats;
mod store;
mod traits;

pub use config::{FifoConfig, DEFAULT_QUEUE_NAME};
pub use error::{FifoError, FifoResult};
pub use fifo::FifoQueue;
pub use monitor::{MonitorControl, MonitorHandle, DEFAULT_POLL_INTERVAL};
pub use stats::FifoStats;
pub use traits::{Queue, UNBOUNDED_CAPACITY};

#[cfg(test)]
mod tests;
