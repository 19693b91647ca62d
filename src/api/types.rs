//! Listing response type definitions.

use serde::Deserialize;

/// One page of the liked-media listing.
#[derive(Debug, Deserialize)]
pub struct LikesPage {
    #[serde(default)]
    pub data: Vec<Like>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination block. The cursor is absent on the last page.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub next_max_like_id: Option<String>,
}

/// A liked media entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Like {
    #[serde(default)]
    pub tags: Vec<String>,
    pub images: Images,
}

/// Available image renditions for an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    pub standard_resolution: Resolution,
}

/// A single image rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct Resolution {
    pub url: String,
}
