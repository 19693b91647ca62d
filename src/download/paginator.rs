//! Listing traversal: the producing side of the pipeline.

use tokio::sync::mpsc;

use crate::api::LikesApi;
use crate::download::queue::DownloadTask;

/// Walk the liked-media listing to completion, queueing one download task
/// per discovered item in page-then-item order.
///
/// The traversal is fail-fast: the first listing error is logged and stops
/// production; tasks already queued still drain. Consumes the sender, so the
/// queue closes as soon as this returns. Returns the number of tasks queued.
pub async fn run_paginator(api: &LikesApi, tx: mpsc::Sender<DownloadTask>) -> u64 {
    // Plain loop state; the listing can run to thousands of pages.
    let mut cursor = String::new();
    let mut queued = 0u64;

    loop {
        let page = match api.get_likes(&cursor).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("failed getting likes: {}", e);
                break;
            }
        };

        tracing::debug!("page at cursor '{}' listed {} item(s)", cursor, page.data.len());

        for like in page.data {
            let task = DownloadTask::new(like.images.standard_resolution.url);
            // Blocks while the queue is full: backpressure, not an error.
            if tx.send(task).await.is_err() {
                tracing::warn!("task queue closed before traversal finished");
                return queued;
            }
            queued += 1;
        }

        match page.pagination.next_max_like_id {
            Some(next) => cursor = next,
            None => break,
        }
    }

    queued
}
