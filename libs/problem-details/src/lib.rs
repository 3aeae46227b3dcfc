//! Problem Details for HTTP APIs (RFC 9457)
//!
//! Pure data contract for `application/problem+json` payloads:
//! - [`ProblemDetails`], the validated value object (`type` and `instance` are always absolute URIs)
//! - [`ProblemDetailsRecord`], the flat serde shape used on the wire
//! - media type constants for the transport layer
//!
//! HTTP framework integration is opt-in through the `axum` and `utoipa` features.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod media_type;
pub mod problem;
pub mod record;
pub mod uri;

pub use error::{ProblemDetailsError, ProblemField};
pub use media_type::{APPLICATION_PROBLEM_JSON, PROBLEM_JSON_ACCEPT, PROBLEM_JSON_CONTENT_TYPE};
pub use problem::{ABOUT_BLANK, ProblemDetails};
pub use record::ProblemDetailsRecord;
