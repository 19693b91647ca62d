//! Instadown - download your liked Instagram photos.
//!
//! Fetches the paginated list of liked media through the foauth.org gateway
//! and streams each standard-resolution image to a local directory, using a
//! small fixed pool of concurrent download workers behind a bounded queue.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use instadown::{download_likes, Config, LikesApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.email = "someone@example.com".to_string();
//!     config.account.password = "secret".to_string();
//!
//!     let api = Arc::new(LikesApi::new(&config)?);
//!     download_likes(api, &config).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::LikesApi;
pub use config::Config;
pub use download::{download_likes, DownloadTask};
pub use error::{Error, Result};
