//! Where the page finds its collection endpoint.

/// Collection endpoint used when the page is mounted without an `api_url`.
pub const DEFAULT_API_URL: &str = "http://localhost:6001/plants";

/// Picks the endpoint for a page, falling back to `DEFAULT_API_URL` when no
/// usable override is given.
pub fn resolve_api_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
