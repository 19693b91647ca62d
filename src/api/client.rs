//! Likes listing HTTP client.

use reqwest::{Client, Response};

use crate::api::types::LikesPage;
use crate::config::Config;
use crate::error::{Error, Result};

/// Path of the liked-media listing behind the foauth gateway.
const LIKES_PATH: &str = "/api.instagram.com/v1/users/self/media/liked";

/// HTTP client for the listing endpoint and image fetches.
///
/// Built once from the immutable configuration; credentials are only
/// attached to listing requests, image fetches go out unauthenticated.
pub struct LikesApi {
    client: Client,
    endpoint: String,
    email: String,
    password: String,
}

impl LikesApi {
    /// Create a new API client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.options.endpoint.clone(),
            email: config.account.email.clone(),
            password: config.account.password.clone(),
        })
    }

    /// Fetch one page of the liked-media listing.
    ///
    /// The cursor is empty on the first call and otherwise carried verbatim
    /// from the previous page's `next_max_like_id`.
    pub async fn get_likes(&self, cursor: &str) -> Result<LikesPage> {
        let url = format!("{}{}?max_like_id={}", self.endpoint, LIKES_PATH, cursor);

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.password))
            .send()
            .await
            .map_err(|e| Error::Listing {
                cursor: cursor.to_string(),
                message: format!("transport error: {}", e),
            })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Listing {
                cursor: cursor.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let text = response.text().await.map_err(|e| Error::Listing {
            cursor: cursor.to_string(),
            message: format!("failed reading body: {}", e),
        })?;

        let page: LikesPage = serde_json::from_str(&text).map_err(|e| Error::Listing {
            cursor: cursor.to_string(),
            message: format!("undecodable body: {}", e),
        })?;

        Ok(page)
    }

    /// Fetch an image URL without authentication.
    ///
    /// Only transport failures are errors; the status is not inspected and
    /// the caller streams whatever body arrives.
    pub async fn fetch_file(&self, url: &str) -> Result<Response> {
        Ok(self.client.get(url).send().await?)
    }
}
