//! API utilities for frontend-backend communication
//!
//! Builds endpoint URLs from the configured API base.

use super::config::{config, API_BASE_OVERRIDE_KEY};

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(API_BASE_OVERRIDE_KEY)
        .ok()?
}

/// Get the base URL for API requests
///
/// Uses the configured `base_url`, a `localStorage` override, or the current
/// window host with the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api/admin"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    config()
        .api
        .resolve_base(&protocol, &hostname, stored_override().as_deref())
}

/// Build a full API URL from a path relative to the API base
///
/// # Example
/// ```ignore
/// let url = api_url("/users/clients");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode one path segment (record ids)
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// URL of an uploaded file. Relative paths resolve against the API host, not the admin prefix.
pub fn asset_url(path: &str) -> String {
    resolve_asset(&api_base(), &config().api.prefix, path)
}

fn resolve_asset(base: &str, prefix: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    let host = base
        .strip_suffix(prefix.trim_end_matches('/'))
        .unwrap_or(base)
        .trim_end_matches('/');
    format!("{}/{}", host, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset() {
        let base = "http://localhost:3000/api/admin";
        assert_eq!(
            resolve_asset(base, "/api/admin", "/uploads/ads/a.png"),
            "http://localhost:3000/uploads/ads/a.png"
        );
        assert_eq!(
            resolve_asset(base, "/api/admin", "uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
        assert_eq!(resolve_asset(base, "/api/admin", "https://cdn.dz/a.png"), "https://cdn.dz/a.png");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("abc123"), "abc123");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}
