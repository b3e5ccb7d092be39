//! API base URL resolution.
//!
//! `OPIFY_API_URL` set at build time wins; otherwise the backend is expected
//! on port 3000 of the host that served the page.

/// Compile-time override for the backend origin.
const API_URL_OVERRIDE: Option<&str> = option_env!("OPIFY_API_URL");

/// Get the base URL for API requests
///
/// # Returns
/// - `OPIFY_API_URL` without a trailing slash, if it was set when building
/// - otherwise an origin like "http://localhost:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_URL_OVERRIDE.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path such as `/batches/12`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Path segment escaping for values that may carry spaces or slashes
/// (store names, product types).
pub fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "/orders"), "http://h:3000/orders");
        assert_eq!(join_url("http://h:3000", "orders"), "http://h:3000/orders");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("My Store/EU"), "My%20Store%2FEU");
        assert_eq!(encode_segment("ACRYLIC KEYCHAINS"), "ACRYLIC%20KEYCHAINS");
    }
}
