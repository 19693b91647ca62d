//! Shared helpers for integration tests.
#![allow(dead_code)]

pub mod likes_server;

use std::path::Path;

use instadown::Config;

/// Request target for a listing page at `cursor` (empty on the first page).
pub fn likes_target(cursor: &str) -> String {
    format!(
        "/api.instagram.com/v1/users/self/media/liked?max_like_id={}",
        cursor
    )
}

/// A listing page body with one item per URL.
pub fn listing_page(urls: &[String], next_cursor: Option<&str>) -> Vec<u8> {
    let data: Vec<_> = urls
        .iter()
        .map(|url| {
            serde_json::json!({
                "tags": [],
                "images": {"standard_resolution": {"url": url}}
            })
        })
        .collect();

    serde_json::json!({
        "data": data,
        "pagination": {"next_max_like_id": next_cursor}
    })
    .to_string()
    .into_bytes()
}

/// Config pointed at a test server, credentials filled in.
pub fn test_config(endpoint: &str, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.account.email = "tester@example.com".to_string();
    config.account.password = "secret".to_string();
    config.options.endpoint = endpoint.to_string();
    config.options.output_directory = output_dir.to_path_buf();
    config
}
