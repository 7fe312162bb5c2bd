//! HTTP utilities for Sleeper API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("sleeper-ffl/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every Sleeper request. The API is public, so there
/// is no auth cookie to add.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}
