//! Errors raised while assigning or reconstructing problem details.

use std::fmt;

use thiserror::Error;

/// Field of a problem details payload that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProblemField {
    Status,
    Type,
    Instance,
}

impl ProblemField {
    /// JSON member name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Type => "type",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for ProblemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem details validation errors.
///
/// Both variants are deterministic: retrying with the same input fails again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemDetailsError {
    /// A setter was handed a value that violates the field's invariant.
    /// The target object is left unchanged.
    #[error("invalid value for '{field}': {reason} ('{value}')")]
    InvalidAssignment {
        field: ProblemField,
        value: String,
        reason: String,
    },

    /// A wire record could not be turned into a valid problem details object.
    #[error("malformed problem details record, field '{field}': {reason} ('{value}')")]
    MalformedRecord {
        field: ProblemField,
        value: String,
        reason: String,
    },
}

impl ProblemDetailsError {
    /// The field that failed validation.
    #[must_use]
    pub const fn field(&self) -> ProblemField {
        match self {
            Self::InvalidAssignment { field, .. } | Self::MalformedRecord { field, .. } => *field,
        }
    }

    /// Offending raw value, as supplied by the caller.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidAssignment { value, .. } | Self::MalformedRecord { value, .. } => value,
        }
    }

    #[must_use]
    pub const fn is_invalid_assignment(&self) -> bool {
        matches!(self, Self::InvalidAssignment { .. })
    }

    #[must_use]
    pub const fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
