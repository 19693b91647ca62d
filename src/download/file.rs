//! Single-file download: exclusive create, then stream to disk.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::api::LikesApi;
use crate::fs::naming::filename_from_url;
use crate::fs::paths::destination;

/// Download one URL into the output directory.
///
/// The destination file is created with exclusive-create semantics: an
/// existing file of the same name means the image was already saved by an
/// earlier run or a concurrent worker, and the task is skipped. All errors
/// are local to the task and never escalate; a transport failure after the
/// file was created leaves it in place as-is.
pub async fn download_one(api: &LikesApi, url: &str, output_dir: &Path) {
    let filename = filename_from_url(url);
    if filename.is_empty() {
        tracing::debug!("Skipping URL with empty final segment: {}", url);
        return;
    }

    if let Err(e) = tokio::fs::create_dir_all(output_dir).await {
        tracing::debug!("Cannot create {}: {}", output_dir.display(), e);
        return;
    }

    let path = match destination(output_dir, filename) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Cannot resolve destination for {}: {}", filename, e);
            return;
        }
    };

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::debug!("Skipping existing file: {}", path.display());
            return;
        }
        Err(e) => {
            tracing::debug!("Cannot create {}: {}", path.display(), e);
            return;
        }
    };

    let response = match api.fetch_file(url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Fetch of {} failed: {}", url, e);
            return;
        }
    };

    // Stream the body chunk by chunk; the payload never sits in memory whole.
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::debug!("Stream from {} ended early: {}", url, e);
                return;
            }
        };

        if let Err(e) = file.write_all(&chunk).await {
            tracing::debug!("Write to {} failed: {}", path.display(), e);
            return;
        }
    }

    if let Err(e) = file.flush().await {
        tracing::debug!("Flush of {} failed: {}", path.display(), e);
        return;
    }

    tracing::info!("Downloaded: {}", path.display());
}
