//! Filename derivation.

/// Derive the local filename for a URL: its final `/`-separated segment,
/// taken verbatim.
///
/// No extension inference, sanitization, or content-type sniffing happens
/// here; names must stay bit-compatible with files written by earlier runs.
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
