//! Summary statistics over a set of check records.

use serde::Serialize;

use super::{CheckKind, CheckRecord, CheckStatus};

/// Counts derived from a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// File checks that passed.
    pub files_passed: usize,
    /// File checks that ran.
    pub files_total: usize,
    /// Command checks (tools, install, quality, tests) that passed.
    pub commands_passed: usize,
    /// Command checks that failed outright.
    pub commands_failed: usize,
    /// Tolerant failures.
    pub commands_warned: usize,
    /// Checks that did not run.
    pub commands_skipped: usize,
}

impl Summary {
    /// Aggregate records into counts.
    pub fn from_records(records: &[CheckRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            if record.kind == CheckKind::File {
                summary.files_total += 1;
                if record.status.is_pass() {
                    summary.files_passed += 1;
                }
            } else {
                match record.status {
                    CheckStatus::Passed => summary.commands_passed += 1,
                    CheckStatus::Failed => summary.commands_failed += 1,
                    CheckStatus::Warned => summary.commands_warned += 1,
                    CheckStatus::Skipped => summary.commands_skipped += 1,
                }
            }
        }

        summary
    }

    /// True iff every file check passed.
    pub fn files_complete(&self) -> bool {
        self.files_passed == self.files_total
    }

    /// The "passed/total" fraction shown in the summary line.
    pub fn files_fraction(&self) -> String {
        format!("{}/{}", self.files_passed, self.files_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckRecord;

    #[test]
    fn counts_files_separately_from_commands() {
        let records = vec![
            CheckRecord::passed("a", "p", CheckKind::File),
            CheckRecord::failed("b", "p", CheckKind::File),
            CheckRecord::passed("t", "c", CheckKind::Tool),
            CheckRecord::failed("q", "c", CheckKind::Quality).tolerated(),
            CheckRecord::failed("i", "c", CheckKind::Install),
            CheckRecord::skipped("s", "c", CheckKind::Quality),
        ];

        let summary = Summary::from_records(&records);
        assert_eq!(summary.files_passed, 1);
        assert_eq!(summary.files_total, 2);
        assert_eq!(summary.commands_passed, 1);
        assert_eq!(summary.commands_failed, 1);
        assert_eq!(summary.commands_warned, 1);
        assert_eq!(summary.commands_skipped, 1);
    }

    #[test]
    fn files_complete_iff_all_passed() {
        let records = vec![
            CheckRecord::passed("a", "p", CheckKind::File),
            CheckRecord::passed("b", "p", CheckKind::File),
        ];
        assert!(Summary::from_records(&records).files_complete());

        let records = vec![
            CheckRecord::passed("a", "p", CheckKind::File),
            CheckRecord::failed("b", "p", CheckKind::File),
        ];
        assert!(!Summary::from_records(&records).files_complete());
    }

    #[test]
    fn files_fraction_formats_counts() {
        let records: Vec<CheckRecord> = (0..7)
            .map(|i| {
                if i < 5 {
                    CheckRecord::passed("f", "p", CheckKind::File)
                } else {
                    CheckRecord::failed("f", "p", CheckKind::File)
                }
            })
            .collect();

        assert_eq!(Summary::from_records(&records).files_fraction(), "5/7");
    }

    #[test]
    fn empty_records_are_complete() {
        let summary = Summary::from_records(&[]);
        assert!(summary.files_complete());
        assert_eq!(summary.files_fraction(), "0/0");
    }
}
