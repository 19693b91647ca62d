//! Fixed-size worker pool: the consuming side of the pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::LikesApi;
use crate::download::file::download_one;
use crate::download::queue::TaskReceiver;

/// Number of concurrent download workers.
pub const WORKER_COUNT: usize = 3;

/// Spawn `count` structurally identical workers draining the shared queue.
///
/// Each worker pulls one task at a time and exits cleanly once the queue is
/// closed and empty. Await the returned handles to wait for the pool.
pub fn spawn_workers(
    count: usize,
    api: Arc<LikesApi>,
    rx: TaskReceiver,
    output_dir: PathBuf,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|worker| {
            let api = Arc::clone(&api);
            let rx = Arc::clone(&rx);
            let output_dir = output_dir.clone();

            tokio::spawn(async move {
                loop {
                    // Hold the receiver lock only while pulling the next
                    // task, never across download I/O.
                    let task = { rx.lock().await.recv().await };

                    let task = match task {
                        Some(task) => task,
                        None => break,
                    };

                    tracing::debug!("worker {} downloading {}", worker, task.url);
                    download_one(&api, &task.url, &output_dir).await;
                }

                tracing::debug!("worker {} exiting, queue drained", worker);
            })
        })
        .collect()
}
