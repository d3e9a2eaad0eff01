use url::Url;

/// File extensions that make a URL look generated rather than designed
const UNFRIENDLY_EXTENSIONS: &[&str] = &[
    ".php", ".html", ".htm", ".jsp", ".asp", ".aspx", ".cgi", ".pl", ".py", ".rb", ".do",
    ".action",
];

/// Checks whether a page URL is "clean" for search and answer engines
///
/// A clean URL has:
/// - no query string and no fragment
/// - no `?`, `&` or `=` characters in its path
/// - no script or template file extension at the end of its path
///
/// Extension matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ai_compliance::url::is_clean_url;
///
/// assert!(is_clean_url(&Url::parse("https://example.com/guides/setup").unwrap()));
/// assert!(!is_clean_url(&Url::parse("https://example.com/index.php").unwrap()));
/// assert!(!is_clean_url(&Url::parse("https://example.com/list?page=2").unwrap()));
/// ```
pub fn is_clean_url(url: &Url) -> bool {
    if url.query().is_some() || url.fragment().is_some() {
        return false;
    }

    let path = url.path();

    if path.contains(['?', '&', '=']) {
        return false;
    }

    !UNFRIENDLY_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
