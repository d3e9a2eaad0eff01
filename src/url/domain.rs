use url::Url;

/// Extracts the network location (`host[:port]`) from a URL
///
/// The host is lowercased and an explicit non-default port is kept, so two URLs
/// share a network location only when they would hit the same origin server.
/// URLs without a host (`mailto:`, `data:`) yield an empty string.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ai_compliance::url::extract_netloc;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_netloc(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_netloc(&url), "127.0.0.1:8080");
/// ```
pub fn extract_netloc(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host.to_lowercase(), port),
        (Some(host), None) => host.to_lowercase(),
        (None, _) => String::new(),
    }
}
