//! Download pipeline: paginator producer, bounded queue, worker pool.
//!
//! This module provides:
//! - The bounded task queue and its task type
//! - The listing traversal (sole producer)
//! - The fixed-size download worker pool
//! - Single-file fetch-and-save

pub mod file;
pub mod paginator;
pub mod pool;
pub mod queue;

use std::sync::Arc;

pub use file::download_one;
pub use paginator::run_paginator;
pub use pool::{spawn_workers, WORKER_COUNT};
pub use queue::{task_queue, DownloadTask, TaskReceiver, QUEUE_CAPACITY};

use crate::api::LikesApi;
use crate::config::Config;

/// Run the full pipeline: traverse the listing while the worker pool drains
/// the queue, then wait for every worker to exit.
///
/// A failed traversal only stops production; whatever was queued is still
/// downloaded before this returns.
pub async fn download_likes(api: Arc<LikesApi>, config: &Config) {
    tracing::info!(
        "downloading likes to {}",
        config.options.output_directory.display()
    );

    let (tx, rx) = task_queue(QUEUE_CAPACITY);
    let workers = spawn_workers(
        WORKER_COUNT,
        Arc::clone(&api),
        rx,
        config.options.output_directory.clone(),
    );

    // run_paginator consumes the sender; its return closes the queue, once.
    let queued = run_paginator(&api, tx).await;
    tracing::debug!("traversal finished, {} task(s) queued", queued);

    for worker in workers {
        if let Err(e) = worker.await {
            tracing::error!("worker task failed: {}", e);
        }
    }
}
