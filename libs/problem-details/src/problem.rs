//! Problem Details value object (RFC 9457) with absolute-URI invariants on `type` and `instance`.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ProblemDetailsError, ProblemField};
use crate::record::ProblemDetailsRecord;
use crate::uri;

/// Problem type assumed when `type` is not present.
pub const ABOUT_BLANK: &str = "about:blank";

/// Machine-readable description of an HTTP error response.
///
/// `status` is fixed at construction. `type` and `instance`, when present, are always
/// absolute URIs: every mutator checks this and leaves the object untouched on failure.
///
/// Serializes through [`ProblemDetailsRecord`], so deserializing JSON directly into a
/// `ProblemDetails` runs the same validation as [`ProblemDetails::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ProblemDetailsRecord", try_from = "ProblemDetailsRecord")]
#[must_use]
pub struct ProblemDetails {
    status: StatusCode,
    type_url: Option<Url>,
    title: Option<String>,
    detail: Option<String>,
    instance: Option<Url>,
}

impl ProblemDetails {
    /// Create a problem with the given status and every optional member unset.
    pub const fn new(status: StatusCode) -> Self {
        Self {
            status,
            type_url: None,
            title: None,
            detail: None,
            instance: None,
        }
    }

    /// Like [`ProblemDetails::new`], with `title` set to the status' canonical reason
    /// phrase when it has one (e.g. `404` -> `"Not Found"`).
    pub fn from_status(status: StatusCode) -> Self {
        let mut p = Self::new(status);
        p.title = status.canonical_reason().map(str::to_owned);
        p
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// URI identifying the problem type, if set.
    #[must_use]
    pub const fn type_url(&self) -> Option<&Url> {
        self.type_url.as_ref()
    }

    /// The problem type as a string; [`ABOUT_BLANK`] when unset.
    #[must_use]
    pub fn effective_type(&self) -> &str {
        self.type_url.as_ref().map_or(ABOUT_BLANK, Url::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// URI identifying this occurrence of the problem, if set.
    #[must_use]
    pub const fn instance(&self) -> Option<&Url> {
        self.instance.as_ref()
    }

    /// Set or clear the problem type.
    ///
    /// # Errors
    /// Returns [`ProblemDetailsError::InvalidAssignment`] if `value` is not an absolute
    /// URI; the current type is kept.
    pub fn set_type(&mut self, value: Option<&str>) -> Result<(), ProblemDetailsError> {
        self.type_url = value
            .map(|raw| parse_assigned(ProblemField::Type, raw))
            .transpose()?;
        Ok(())
    }

    /// Set or clear the occurrence URI.
    ///
    /// # Errors
    /// Returns [`ProblemDetailsError::InvalidAssignment`] if `value` is not an absolute
    /// URI; the current instance is kept.
    pub fn set_instance(&mut self, value: Option<&str>) -> Result<(), ProblemDetailsError> {
        self.instance = value
            .map(|raw| parse_assigned(ProblemField::Instance, raw))
            .transpose()?;
        Ok(())
    }

    /// Infallible variant of [`ProblemDetails::set_type`]: a parsed [`Url`] is always absolute.
    pub fn set_type_url(&mut self, value: Option<Url>) {
        self.type_url = value;
    }

    /// Infallible variant of [`ProblemDetails::set_instance`].
    pub fn set_instance_url(&mut self, value: Option<Url>) {
        self.instance = value;
    }

    pub fn set_title(&mut self, value: Option<String>) {
        self.title = value;
    }

    pub fn set_detail(&mut self, value: Option<String>) {
        self.detail = value;
    }

    /// Builder form of [`ProblemDetails::set_type`].
    ///
    /// # Errors
    /// Returns [`ProblemDetailsError::InvalidAssignment`] if `type_url` is not absolute.
    pub fn with_type(mut self, type_url: &str) -> Result<Self, ProblemDetailsError> {
        self.set_type(Some(type_url))?;
        Ok(self)
    }

    /// Builder form of [`ProblemDetails::set_instance`].
    ///
    /// # Errors
    /// Returns [`ProblemDetailsError::InvalidAssignment`] if `instance` is not absolute.
    pub fn with_instance(mut self, instance: &str) -> Result<Self, ProblemDetailsError> {
        self.set_instance(Some(instance))?;
        Ok(self)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

fn parse_assigned(field: ProblemField, raw: &str) -> Result<Url, ProblemDetailsError> {
    uri::parse_absolute(raw).map_err(|rejection| {
        tracing::debug!(%field, value = raw, %rejection, "rejected problem details assignment");
        ProblemDetailsError::InvalidAssignment {
            field,
            value: raw.to_owned(),
            reason: rejection.to_string(),
        }
    })
}

/// Axum integration: make `ProblemDetails` directly usable as a response
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        let mut resp = axum::Json(ProblemDetailsRecord::from(self)).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            crate::media_type::content_type_header(),
        );
        resp
    }
}
