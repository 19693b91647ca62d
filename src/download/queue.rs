//! Bounded work queue shared between the paginator and the worker pool.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

/// Queue capacity. The paginator blocks once this many tasks are waiting,
/// decoupling the listing fetch rate from the download rate without
/// unbounded memory growth.
pub const QUEUE_CAPACITY: usize = 50;

/// A single image URL queued for retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub url: String,
}

impl DownloadTask {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Receiving half of the task queue, shared by all workers.
pub type TaskReceiver = Arc<Mutex<mpsc::Receiver<DownloadTask>>>;

/// Create the bounded task queue.
///
/// The queue closes when the sender is dropped; workers observe `None` from
/// `recv` once it is both closed and drained.
pub fn task_queue(capacity: usize) -> (mpsc::Sender<DownloadTask>, TaskReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (tx, Arc::new(Mutex::new(rx)))
}
