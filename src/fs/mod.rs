//! Filesystem module.
//!
//! Provides:
//! - Filename derivation from image URLs
//! - Destination path resolution

pub mod naming;
pub mod paths;

pub use naming::filename_from_url;
pub use paths::destination;
