//! Flat wire shape of a problem details payload and conversions to and from [`ProblemDetails`].

use http::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::error::{ProblemDetailsError, ProblemField};
use crate::problem::ProblemDetails;
use crate::uri;

/// Serialization-only view of a problem, as exchanged in `application/problem+json` bodies.
///
/// Carries no invariants; validation happens in [`ProblemDetails::from_record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDetails",
        description = "RFC 9457 Problem Details for HTTP APIs"
    )
)]
pub struct ProblemDetailsRecord {
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// Absolute URI identifying the problem type. Absent means `about:blank`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    /// A short, human-readable summary of the problem type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Absolute URI identifying this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    /// Flatten into the wire record. Never fails.
    #[must_use]
    pub fn to_record(&self) -> ProblemDetailsRecord {
        ProblemDetailsRecord {
            status: self.status().as_u16(),
            type_url: self.type_url().map(|u| u.as_str().to_owned()),
            title: self.title().map(str::to_owned),
            detail: self.detail().map(str::to_owned),
            instance: self.instance().map(|u| u.as_str().to_owned()),
        }
    }

    /// Rebuild a validated problem from a wire record.
    ///
    /// Empty or whitespace-only `type`/`instance` strings are read as "not set".
    ///
    /// # Errors
    /// Returns [`ProblemDetailsError::MalformedRecord`] when `status` is not a valid
    /// HTTP status code, or when `type`/`instance` holds a non-empty string that is not
    /// an absolute URI.
    pub fn from_record(record: ProblemDetailsRecord) -> Result<Self, ProblemDetailsError> {
        let status = StatusCode::from_u16(record.status).map_err(|e| {
            malformed(ProblemField::Status, record.status.to_string(), e.to_string())
        })?;
        let type_url = parse_record_uri(ProblemField::Type, record.type_url.as_deref())?;
        let instance = parse_record_uri(ProblemField::Instance, record.instance.as_deref())?;

        let mut problem = Self::new(status);
        problem.set_type_url(type_url);
        problem.set_instance_url(instance);
        problem.set_title(record.title);
        problem.set_detail(record.detail);
        Ok(problem)
    }
}

fn parse_record_uri(
    field: ProblemField,
    raw: Option<&str>,
) -> Result<Option<Url>, ProblemDetailsError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => uri::parse_absolute(raw)
            .map(Some)
            .map_err(|rejection| malformed(field, raw.to_owned(), rejection.to_string())),
        _ => Ok(None),
    }
}

fn malformed(field: ProblemField, value: String, reason: String) -> ProblemDetailsError {
    tracing::debug!(%field, value = %value, reason = %reason, "rejected problem details record");
    ProblemDetailsError::MalformedRecord {
        field,
        value,
        reason,
    }
}

impl From<&ProblemDetails> for ProblemDetailsRecord {
    fn from(p: &ProblemDetails) -> Self {
        p.to_record()
    }
}

impl From<ProblemDetails> for ProblemDetailsRecord {
    fn from(p: ProblemDetails) -> Self {
        p.to_record()
    }
}

impl TryFrom<ProblemDetailsRecord> for ProblemDetails {
    type Error = ProblemDetailsError;

    fn try_from(record: ProblemDetailsRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn record(status: u16, type_url: Option<&str>) -> ProblemDetailsRecord {
        ProblemDetailsRecord {
            status,
            type_url: type_url.map(str::to_owned),
            ..ProblemDetailsRecord::default()
        }
    }

    #[test]
    fn not_found_scenario_flattens_to_expected_record() {
        let p = ProblemDetails::new(StatusCode::NOT_FOUND)
            .with_title("Not Found")
            .with_detail("Order 123 does not exist")
            .with_type("https://example.com/probs/not-found")
            .unwrap();

        assert_eq!(
            p.to_record(),
            ProblemDetailsRecord {
                status: 404,
                type_url: Some("https://example.com/probs/not-found".to_owned()),
                title: Some("Not Found".to_owned()),
                detail: Some("Order 123 does not exist".to_owned()),
                instance: None,
            }
        );
    }

    #[test]
    fn empty_or_blank_uri_strings_mean_unset() {
        for blank in ["", "   ", "\t\n"] {
            let mut r = record(400, Some(blank));
            r.instance = Some(blank.to_owned());
            let p = ProblemDetails::from_record(r).unwrap();
            assert!(p.type_url().is_none());
            assert!(p.instance().is_none());
        }
    }

    #[test]
    fn rejects_non_uri_type() {
        let err = ProblemDetails::from_record(record(400, Some("not a uri"))).unwrap_err();
        assert!(err.is_malformed_record());
        assert_eq!(err.field(), ProblemField::Type);
    }

    #[test]
    fn rejects_relative_type() {
        let err = ProblemDetails::from_record(record(400, Some("/relative/path"))).unwrap_err();
        assert!(err.is_malformed_record());
        assert_eq!(err.value(), "/relative/path");
    }

    #[test]
    fn rejects_relative_instance() {
        let mut r = record(500, Some("https://example.com/probs/internal"));
        r.instance = Some("requests/42".to_owned());
        let err = ProblemDetails::from_record(r).unwrap_err();
        assert!(err.is_malformed_record());
        assert_eq!(err.field(), ProblemField::Instance);
    }

    #[test]
    fn rejects_out_of_range_status() {
        for status in [0, 42, 1000] {
            let err = ProblemDetails::from_record(record(status, None)).unwrap_err();
            assert!(err.is_malformed_record());
            assert_eq!(err.field(), ProblemField::Status);
        }
    }

    #[test]
    fn copies_title_and_detail_verbatim() {
        let r = ProblemDetailsRecord {
            status: 403,
            type_url: None,
            title: Some("  Forbidden ".to_owned()),
            detail: Some(String::new()),
            instance: None,
        };
        let p = ProblemDetails::try_from(r).unwrap();
        assert_eq!(p.title(), Some("  Forbidden "));
        assert_eq!(p.detail(), Some(""));
    }

    #[test]
    fn round_trip_preserves_every_member() {
        let samples = [
            ProblemDetails::new(StatusCode::OK),
            ProblemDetails::from_status(StatusCode::TOO_MANY_REQUESTS)
                .with_detail("Retry in 30s")
                .with_type("https://example.com/probs/rate-limited")
                .unwrap()
                .with_instance("urn:uuid:0b8f1a52-4bd6-4a53-9c39-1f1e3c1d7d1f")
                .unwrap(),
            ProblemDetails::new(StatusCode::from_u16(599).unwrap())
                .with_type("about:blank")
                .unwrap()
                .with_title("Custom"),
            ProblemDetails::new(StatusCode::BAD_GATEWAY)
                .with_type("a://x/..//y")
                .unwrap()
                .with_instance("HTTP://EX.com/%7e?x#y")
                .unwrap(),
        ];
        for p in samples {
            let back = ProblemDetails::from_record(ProblemDetailsRecord::from(&p)).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn record_carries_normalized_uri_strings() {
        let p = ProblemDetails::new(StatusCode::BAD_GATEWAY)
            .with_type("a://x/..//y")
            .unwrap()
            .with_instance("HTTP://EX.com/%7e?x#y")
            .unwrap();
        let r = p.to_record();
        assert_eq!(r.type_url.as_deref(), Some("a://x//y"));
        assert_eq!(r.instance.as_deref(), Some("http://ex.com/%7e?x#y"));
    }

    #[test]
    fn absent_members_are_omitted_on_the_wire() {
        let json = serde_json::to_string(&record(404, None)).unwrap();
        assert_eq!(json, r#"{"status":404}"#);

        let parsed: ProblemDetailsRecord = serde_json::from_str(r#"{"status":404}"#).unwrap();
        assert_eq!(parsed, record(404, None));
    }
}
