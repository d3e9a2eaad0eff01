//! URL handling module
//!
//! This module provides target normalization, network-location extraction, the
//! internal-link test used by the crawler, and the clean-URL test used by the
//! technical performance scorer.

mod domain;
mod normalize;
mod path;

use ::url::Url;

// Re-export main functions
pub use domain::extract_netloc;
pub use normalize::normalize_target;
pub use path::is_clean_url;

/// Checks if a link is internal to the site being analyzed
///
/// Two URLs are on the same site when their network locations are equal. A
/// candidate with an empty network location is also internal: once resolved
/// against its page it can only point back at the same origin.
///
/// # Arguments
///
/// * `base` - The analysis start URL
/// * `candidate` - The resolved link target
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ai_compliance::url::is_internal_link;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// assert!(is_internal_link(&base, &Url::parse("https://example.com/about").unwrap()));
/// assert!(!is_internal_link(&base, &Url::parse("https://blog.example.com/").unwrap()));
/// ```
pub fn is_internal_link(base: &Url, candidate: &Url) -> bool {
    let candidate_netloc = extract_netloc(candidate);
    candidate_netloc.is_empty() || candidate_netloc == extract_netloc(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_domain_is_internal() {
        let base = parse("https://example.com/");
        assert!(is_internal_link(&base, &parse("https://example.com/a/b")));
    }

    #[test]
    fn test_scheme_does_not_matter() {
        let base = parse("https://example.com/");
        assert!(is_internal_link(&base, &parse("http://example.com/a")));
    }

    #[test]
    fn test_subdomain_is_external() {
        let base = parse("https://example.com/");
        assert!(!is_internal_link(&base, &parse("https://www.example.com/")));
    }

    #[test]
    fn test_other_domain_is_external() {
        let base = parse("https://example.com/");
        assert!(!is_internal_link(&base, &parse("https://other.org/")));
    }

    #[test]
    fn test_different_port_is_external() {
        let base = parse("http://127.0.0.1:3000/");
        assert!(!is_internal_link(&base, &parse("http://127.0.0.1:4000/")));
    }

    #[test]
    fn test_hostless_candidate_is_internal() {
        let base = parse("https://example.com/");
        assert!(is_internal_link(&base, &parse("data:text/plain,hi")));
    }
}
