//! Validation of `application/problem+json` documents.

use std::path::Path;

use problem_details::{ProblemDetails, ProblemDetailsError, ProblemDetailsRecord};
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::{Violation, ViolationKind};

/// Outcome of validating one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Number of problem objects examined.
    pub problems: usize,
    pub violations: Vec<Violation>,
}

/// Validate a document holding either one problem object or an array of them.
#[must_use]
pub fn validate_document(file: &Path, content: &str, config: &ValidatorConfig) -> DocumentReport {
    let value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            return DocumentReport {
                problems: 0,
                violations: vec![Violation::file_level(
                    file,
                    ViolationKind::InvalidJson,
                    format!("invalid JSON: {e}"),
                )],
            };
        }
    };

    let mut report = DocumentReport::default();
    match value {
        Value::Array(items) if items.is_empty() => {
            report.violations.push(Violation::file_level(
                file,
                ViolationKind::NotAProblem,
                "empty array: expected at least one problem details object",
            ));
        }
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                report.problems += 1;
                report
                    .violations
                    .extend(validate_problem(file, Some(index), item, config));
            }
        }
        item => {
            report.problems = 1;
            report.violations = validate_problem(file, None, item, config);
        }
    }

    tracing::debug!(
        file = %file.display(),
        problems = report.problems,
        violations = report.violations.len(),
        "document validated"
    );
    report
}

/// Validate a single JSON value as a problem details object.
fn validate_problem(
    file: &Path,
    index: Option<usize>,
    value: Value,
    config: &ValidatorConfig,
) -> Vec<Violation> {
    let violation = |kind, field: Option<&str>, message: String| Violation {
        file: file.to_path_buf(),
        index,
        kind,
        field: field.map(str::to_owned),
        message,
    };

    let record: ProblemDetailsRecord = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            return vec![violation(
                ViolationKind::NotAProblem,
                None,
                format!("not a problem details object: {e}"),
            )];
        }
    };

    let problem = match ProblemDetails::from_record(record) {
        Ok(p) => p,
        Err(e) => {
            let field = malformed_field(&e);
            return vec![violation(ViolationKind::Malformed, field, e.to_string())];
        }
    };

    let mut violations = Vec::new();
    if config.require_type && problem.type_url().is_none() {
        violations.push(violation(
            ViolationKind::MissingType,
            Some("type"),
            "missing problem type URI".to_owned(),
        ));
    }
    if config.require_title && problem.title().is_none_or(|t| t.trim().is_empty()) {
        violations.push(violation(
            ViolationKind::MissingTitle,
            Some("title"),
            "missing problem title".to_owned(),
        ));
    }
    violations
}

fn malformed_field(e: &ProblemDetailsError) -> Option<&'static str> {
    if e.is_malformed_record() {
        Some(e.field().as_str())
    } else {
        None
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn validate(content: &str, config: &ValidatorConfig) -> DocumentReport {
        validate_document(Path::new("doc.json"), content, config)
    }

    #[test]
    fn accepts_valid_problem() {
        let report = validate(
            r#"{"status":404,"type":"https://example.com/probs/not-found","title":"Not Found","detail":"Order 123 does not exist"}"#,
            &ValidatorConfig::default(),
        );
        assert_eq!(report.problems, 1);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn reports_relative_type() {
        let report = validate(
            r#"{"status":400,"type":"/relative/path"}"#,
            &ValidatorConfig::default(),
        );
        assert_eq!(report.violations.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.kind, ViolationKind::Malformed);
        assert_eq!(v.field.as_deref(), Some("type"));
        assert_eq!(v.index, None);
    }

    #[test]
    fn blank_type_is_not_a_violation_by_default() {
        let report = validate(r#"{"status":500,"type":""}"#, &ValidatorConfig::default());
        assert!(report.violations.is_empty());
    }

    #[test]
    fn validates_each_array_member() {
        let report = validate(
            r#"[
                {"status":400,"type":"https://example.com/probs/a"},
                {"status":400,"instance":"requests/1"},
                {"title":"no status"}
            ]"#,
            &ValidatorConfig::default(),
        );
        assert_eq!(report.problems, 3);
        let kinds: Vec<_> = report
            .violations
            .iter()
            .map(|v| (v.index, v.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Some(1), ViolationKind::Malformed),
                (Some(2), ViolationKind::NotAProblem),
            ]
        );
        assert_eq!(report.violations[0].field.as_deref(), Some("instance"));
    }

    #[test]
    fn reports_empty_array() {
        let report = validate("[]", &ValidatorConfig::default());
        assert_eq!(report.problems, 0);
        assert_eq!(report.violations.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.kind, ViolationKind::NotAProblem);
        assert_eq!(v.index, None);
    }

    #[test]
    fn policy_requires_type_and_title() {
        let config = ValidatorConfig {
            require_type: true,
            require_title: true,
            ..ValidatorConfig::default()
        };
        let report = validate(r#"{"status":409,"title":"  "}"#, &config);
        let kinds: Vec<_> = report.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![ViolationKind::MissingType, ViolationKind::MissingTitle]
        );
    }

    #[test]
    fn reports_invalid_json() {
        let report = validate("{not json", &ValidatorConfig::default());
        assert_eq!(report.problems, 0);
        assert_eq!(report.violations[0].kind, ViolationKind::InvalidJson);
    }

    #[test]
    fn reports_out_of_range_status() {
        let report = validate(r#"{"status":42}"#, &ValidatorConfig::default());
        assert_eq!(report.violations[0].kind, ViolationKind::Malformed);
        assert_eq!(report.violations[0].field.as_deref(), Some("status"));
    }
}
