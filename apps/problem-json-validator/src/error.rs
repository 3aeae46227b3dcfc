//! Violation and error types reported by the validator.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// File could not be read (I/O or encoding error)
    Unreadable,
    /// File exceeds the configured size limit
    TooLarge,
    /// File is not valid JSON
    InvalidJson,
    /// JSON value does not have the problem details shape (e.g. missing `status`)
    NotAProblem,
    /// Problem details record failed validation (bad status or non-absolute URI)
    Malformed,
    /// `type` is required by policy but absent
    MissingType,
    /// `title` is required by policy but absent
    MissingTitle,
}

/// A single finding for one file, or one problem object inside a file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    /// File path (`-` for stdin)
    pub file: PathBuf,
    /// Position of the problem inside a top-level JSON array; `None` for single documents
    pub index: Option<usize>,
    pub kind: ViolationKind,
    /// Offending problem member, when the finding is about one
    pub field: Option<String>,
    /// Human-readable error description
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn file_level(
        file: impl Into<PathBuf>,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            index: None,
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Format the violation for human-readable output.
    ///
    /// `{file}[{index}]: {message} (field: {field})`, omitting the parts that are absent.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let index = self.index.map(|i| format!("[{i}]")).unwrap_or_default();
        let field = self
            .field
            .as_ref()
            .map(|f| format!(" (field: {f})"))
            .unwrap_or_default();
        format!("{}{index}: {}{field}", self.file.display(), self.message)
    }
}

/// Failures that abort the run before any document is validated.
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("path does not exist: {0}")]
    MissingPath(PathBuf),

    #[error("config file does not exist: {0}")]
    MissingConfig(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("no files found to scan; check paths and exclusion patterns")]
    NothingToScan,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn formats_array_member_violation() {
        let v = Violation {
            file: PathBuf::from("fixtures/errors.json"),
            index: Some(2),
            kind: ViolationKind::Malformed,
            field: Some("type".to_owned()),
            message: "URI must be absolute".to_owned(),
        };
        assert_eq!(
            v.format_human_readable(),
            "fixtures/errors.json[2]: URI must be absolute (field: type)"
        );
    }

    #[test]
    fn formats_file_level_violation() {
        let v = Violation::file_level("big.json", ViolationKind::TooLarge, "file too large");
        assert_eq!(v.format_human_readable(), "big.json: file too large");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ViolationKind::MissingTitle).unwrap();
        assert_eq!(json, "\"missing_title\"");
    }
}
