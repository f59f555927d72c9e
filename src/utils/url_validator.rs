//! Validation of URLs submitted for shortening.
//!
//! Only the shape of the URL is checked: it must parse as an absolute URL with
//! an `http` or `https` scheme, spelled out as `scheme://`, and a non-empty
//! host. Reachability and content are never inspected. Accepted input is
//! stored byte for byte, so anything the parser would silently repair is
//! rejected instead.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Checks that `input` is a shortenable URL.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] when the URL does not parse (including
///   relative URLs such as `example.com`), has surrounding whitespace, or
///   lacks the `//` after its scheme
/// - [`UrlValidationError::UnsupportedProtocol`] for schemes other than HTTP(S)
/// - [`UrlValidationError::MissingHost`] when the host is empty
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path").is_ok());
/// assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
/// assert_eq!(validate_url("ftp://example.com"), Err(UrlValidationError::UnsupportedProtocol));
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "leading or trailing whitespace".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    // `https:example.com` and `http:/example.com` parse, but only because the
    // parser fills in the missing slashes.
    if !input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"))
    {
        return Err(UrlValidationError::InvalidFormat(
            "expected scheme://host".to_string(),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
