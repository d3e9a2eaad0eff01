use crate::{UrlError, UrlResult};
use url::Url;

/// Normalizes a user-supplied analysis target into an absolute URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prepend `https://` when the input carries no `http://` or `https://` scheme
/// 3. Parse the URL; reject if malformed
/// 4. Reject URLs without a host
///
/// Unlike link resolution during the crawl, the path, query and fragment are
/// left untouched: the report names the URL exactly as it was analyzed.
///
/// # Arguments
///
/// * `input` - The target as typed by the user
///
/// # Returns
///
/// * `Ok(Url)` - Absolute http(s) URL
/// * `Err(UrlError)` - Failed to parse or the URL has no host
///
/// # Examples
///
/// ```
/// use ai_compliance::url::normalize_target;
///
/// let url = normalize_target("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// let url = normalize_target("http://example.com/blog").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/blog");
/// ```
pub fn normalize_target(input: &str) -> UrlResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let lowered = trimmed.to_ascii_lowercase();
    let with_scheme = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}
