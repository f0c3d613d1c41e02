//! External link validation.
//!
//! Social profile URLs come straight from the content file and end up in
//! `href` attributes, so only absolute http(s) URLs with a host are accepted.

use crate::error::UrlValidationError;

/// Validate an external link.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a valid host
///
/// Returns the trimmed URL on success.
pub fn validate_external_url(url: &str) -> Result<&str, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return Err(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return Err(UrlValidationError::NoHost);
    }

    Ok(url)
}

/// Extract the lowercase host from an http(s) URL, without `www.` or port.
pub fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Drop credentials and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_external_url("https://github.com/user"),
            Ok("https://github.com/user")
        );
        assert_eq!(
            validate_external_url("  http://dribbble.com/someone  "),
            Ok("http://dribbble.com/someone")
        );
        assert!(validate_external_url("HTTPS://www.linkedin.com/in/me").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(validate_external_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_external_url("   "), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("ftp://example.com"),
            Err(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("https://"),
            Err(UrlValidationError::NoHost)
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://github.com/user"),
            Some("github.com".to_string())
        );
        assert_eq!(
            extract_host("https://www.behance.net/user"),
            Some("behance.net".to_string())
        );
        assert_eq!(
            extract_host("https://api.github.com:443/repos"),
            Some("api.github.com".to_string())
        );
        assert_eq!(
            extract_host("https://x.com?ref=folio"),
            Some("x.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
        assert_eq!(extract_host("mailto:me@example.com"), None);
    }
}
