//! Absolute URI validation.
//!
//! A value counts as absolute when `url::Url::parse` accepts it without a base,
//! i.e. WHATWG URL parsing with a mandatory scheme. Relative references such as
//! `foo/bar` or `/relative/path` never parse and are reported as [`UriRejection::Relative`].

use thiserror::Error;
use url::Url;

/// Why a string was not accepted as an absolute URI.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UriRejection {
    /// No scheme: the value is a relative reference (or not a URI at all).
    #[error("URI must be absolute")]
    Relative,

    #[error("invalid URI: {0}")]
    Invalid(url::ParseError),
}

/// Parse `raw` as an absolute URI.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`UriRejection::Relative`] when `raw` has no scheme and
/// [`UriRejection::Invalid`] for any other parse failure.
pub fn parse_absolute(raw: &str) -> Result<Url, UriRejection> {
    Url::parse(raw.trim()).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => UriRejection::Relative,
        other => UriRejection::Invalid(other),
    })
}

/// Convenience predicate over [`parse_absolute`].
#[must_use]
pub fn is_absolute(raw: &str) -> bool {
    parse_absolute(raw).is_ok()
}
