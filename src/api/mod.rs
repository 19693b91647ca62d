//! Likes listing API module.
//!
//! This module provides:
//! - HTTP client for the foauth-proxied likes endpoint
//! - Listing response types

pub mod client;
pub mod types;

pub use client::LikesApi;
pub use types::*;
