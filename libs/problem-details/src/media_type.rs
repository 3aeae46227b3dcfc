//! `application/problem+json` media type identifiers used during content negotiation.

use http::HeaderValue;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// `Content-Type` value for problem responses, with an explicit UTF-8 charset.
pub const PROBLEM_JSON_CONTENT_TYPE: &str = "application/problem+json; charset=utf-8";

/// `Accept` entry for problem responses, with an explicit quality weighting of 1.0.
pub const PROBLEM_JSON_ACCEPT: &str = "application/problem+json; q=1.0";

/// [`PROBLEM_JSON_CONTENT_TYPE`] as a header value.
#[must_use]
pub fn content_type_header() -> HeaderValue {
    HeaderValue::from_static(PROBLEM_JSON_CONTENT_TYPE)
}

/// [`PROBLEM_JSON_ACCEPT`] as a header value.
#[must_use]
pub fn accept_header() -> HeaderValue {
    HeaderValue::from_static(PROBLEM_JSON_ACCEPT)
}

/// Whether a `Content-Type` value denotes `application/problem+json`.
///
/// Parameters (`charset`, `q`, ...) are ignored and the comparison is case-insensitive.
#[must_use]
pub fn is_problem_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(APPLICATION_PROBLEM_JSON))
}
