//! Check records and report aggregation.
//!
//! Every check the pipeline runs produces a [`CheckRecord`]; records are
//! collected into a [`ValidationReport`] which computes the summary and the
//! overall gate. The report serializes directly for `--json` output.

pub mod summary;

use serde::Serialize;

pub use summary::Summary;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Check passed.
    Passed,
    /// Check failed.
    Failed,
    /// Check failed but is tolerant: reported, never gates.
    Warned,
    /// Check did not run (e.g. quality tools after a failed install).
    Skipped,
}

impl CheckStatus {
    /// Whether this status counts as passing.
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Pipeline stage a record belongs to.
///
/// Only `File` records gate the default (lenient) exit code; see
/// [`ValidationReport::overall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Required-file existence check.
    File,
    /// Tool availability probe.
    Tool,
    /// Dependency installation.
    Install,
    /// Quality tool invocation (formatter, linter, scanner).
    Quality,
    /// Smoke test or test-suite invocation.
    Test,
}

/// A single check outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    /// Human label, e.g. "Flake8 Configuration".
    pub label: String,
    /// What was checked: a path or a command line.
    pub subject: String,
    /// Pipeline stage.
    pub kind: CheckKind,
    /// Outcome.
    pub status: CheckStatus,
    /// Captured error text or version info, when there is any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckRecord {
    /// Create a passing record.
    pub fn passed(label: &str, subject: &str, kind: CheckKind) -> Self {
        Self {
            label: label.to_string(),
            subject: subject.to_string(),
            kind,
            status: CheckStatus::Passed,
            detail: None,
        }
    }

    /// Create a failing record.
    pub fn failed(label: &str, subject: &str, kind: CheckKind) -> Self {
        Self {
            label: label.to_string(),
            subject: subject.to_string(),
            kind,
            status: CheckStatus::Failed,
            detail: None,
        }
    }

    /// Create a skipped record.
    pub fn skipped(label: &str, subject: &str, kind: CheckKind) -> Self {
        Self {
            label: label.to_string(),
            subject: subject.to_string(),
            kind,
            status: CheckStatus::Skipped,
            detail: None,
        }
    }

    /// Attach detail text (error output, version string).
    pub fn with_detail(mut self, detail: &str) -> Self {
        if !detail.is_empty() {
            self.detail = Some(detail.to_string());
        }
        self
    }

    /// Downgrade a failure to a warning for tolerant checks.
    pub fn tolerated(mut self) -> Self {
        if self.status == CheckStatus::Failed {
            self.status = CheckStatus::Warned;
        }
        self
    }
}

/// Collected results of a validation run.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Project name shown in the header.
    pub project: String,
    /// All records in execution order.
    pub records: Vec<CheckRecord>,
}

impl ValidationReport {
    /// Create an empty report for the given project.
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            records: Vec::new(),
        }
    }

    /// Append a record, returning a reference to it for display.
    pub fn push(&mut self, record: CheckRecord) -> &CheckRecord {
        self.records.push(record);
        self.records.last().unwrap()
    }

    /// Records of a given kind.
    pub fn of_kind(&self, kind: CheckKind) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Compute the summary.
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    /// Overall success.
    ///
    /// Lenient mode gates strictly on file-existence checks; command
    /// outcomes are reported but ignored. Strict mode additionally requires
    /// every non-tolerant command check to have passed (warned and skipped
    /// records never gate).
    pub fn overall(&self, strict: bool) -> bool {
        let files_ok = self
            .of_kind(CheckKind::File)
            .all(|r| r.status.is_pass());

        if !strict {
            return files_ok;
        }

        files_ok
            && self
                .records
                .iter()
                .filter(|r| r.kind != CheckKind::File)
                .all(|r| r.status != CheckStatus::Failed)
    }

    /// Serialize the report with its summary for `--json` output.
    pub fn to_json(&self, strict: bool) -> serde_json::Value {
        serde_json::json!({
            "project": &self.project,
            "records": &self.records,
            "summary": self.summary(),
            "overall": self.overall(strict),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_record(label: &str, passed: bool) -> CheckRecord {
        if passed {
            CheckRecord::passed(label, "some/path", CheckKind::File)
        } else {
            CheckRecord::failed(label, "some/path", CheckKind::File)
        }
    }

    #[test]
    fn overall_lenient_requires_all_files() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        report.push(file_record("b", false));
        assert!(!report.overall(false));
    }

    #[test]
    fn overall_lenient_ignores_command_failures() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        report.push(CheckRecord::failed("lint", "flake8 .", CheckKind::Quality));
        report.push(CheckRecord::failed("tools", "python --version", CheckKind::Tool));
        assert!(report.overall(false));
    }

    #[test]
    fn overall_strict_gates_on_command_failures() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        report.push(CheckRecord::failed("tools", "python --version", CheckKind::Tool));
        assert!(!report.overall(true));
    }

    #[test]
    fn overall_strict_ignores_warned_and_skipped() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        report.push(
            CheckRecord::failed("lint", "flake8 .", CheckKind::Quality).tolerated(),
        );
        report.push(CheckRecord::skipped("scan", "bandit -r .", CheckKind::Quality));
        assert!(report.overall(true));
    }

    #[test]
    fn tolerated_downgrades_failure_only() {
        let warned = CheckRecord::failed("x", "cmd", CheckKind::Quality).tolerated();
        assert_eq!(warned.status, CheckStatus::Warned);

        let passed = CheckRecord::passed("x", "cmd", CheckKind::Quality).tolerated();
        assert_eq!(passed.status, CheckStatus::Passed);
    }

    #[test]
    fn with_detail_skips_empty() {
        let record = CheckRecord::failed("x", "cmd", CheckKind::Test).with_detail("");
        assert!(record.detail.is_none());

        let record = CheckRecord::failed("x", "cmd", CheckKind::Test).with_detail("boom");
        assert_eq!(record.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn of_kind_filters() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        report.push(CheckRecord::passed("t", "cmd", CheckKind::Tool));
        assert_eq!(report.of_kind(CheckKind::File).count(), 1);
        assert_eq!(report.of_kind(CheckKind::Tool).count(), 1);
        assert_eq!(report.of_kind(CheckKind::Quality).count(), 0);
    }

    #[test]
    fn to_json_includes_summary_and_overall() {
        let mut report = ValidationReport::new("Test");
        report.push(file_record("a", true));
        let value = report.to_json(false);
        assert_eq!(value["project"], "Test");
        assert_eq!(value["overall"], true);
        assert!(value["summary"]["files_total"].is_number());
    }
}
