//! Terminal output components.
//!
//! This module provides:
//! - [`Reporter`] - mode- and theme-aware printer for check records
//! - [`CivetTheme`] - console styles with a plain fallback
//! - [`StatusKind`] - canonical status icon vocabulary
//! - [`ProgressSpinner`] - spinner for long-running commands
//!
//! # Example
//!
//! ```
//! use civet::ui::{OutputMode, Reporter};
//!
//! let reporter = Reporter::plain(OutputMode::Normal);
//! reporter.section("Running Code Quality Checks");
//! ```

pub mod icons;
pub mod output;
pub mod spinner;
pub mod theme;

pub use icons::StatusKind;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, CivetTheme};

use crate::report::{CheckKind, CheckRecord, CheckStatus};

/// Mode- and theme-aware printer for validation output.
pub struct Reporter {
    theme: CivetTheme,
    mode: OutputMode,
    styled: bool,
}

impl Reporter {
    /// Create a reporter for the current terminal.
    pub fn new(mode: OutputMode) -> Self {
        if should_use_colors() {
            Self {
                theme: CivetTheme::new(),
                mode,
                styled: true,
            }
        } else {
            Self::plain(mode)
        }
    }

    /// Create a colorless reporter with bracketed status text.
    pub fn plain(mode: OutputMode) -> Self {
        Self {
            theme: CivetTheme::plain(),
            mode,
            styled: false,
        }
    }

    /// The active output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    fn status_line(&self, kind: StatusKind, msg: &str) -> String {
        if self.styled {
            kind.format(&self.theme, msg)
        } else {
            kind.format_plain(msg)
        }
    }

    /// Print the run header.
    pub fn header(&self, title: &str) {
        if self.mode.shows_checks() {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Print a section title with surrounding blank lines.
    pub fn section(&self, title: &str) {
        if self.mode.shows_checks() {
            println!();
            println!("{}", self.theme.format_header(title));
            println!();
        }
    }

    /// Print a plain message.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_checks() {
            println!("{}", msg);
        }
    }

    /// Print a message regardless of mode (the summary block).
    pub fn always(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Print an error to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Print the command behind a check (verbose mode only).
    pub fn command_line(&self, command: &str) {
        if self.mode.shows_commands() {
            println!("  {}", self.theme.command.apply_to(format!("$ {}", command)));
        }
    }

    /// Print a check record as a status line.
    ///
    /// Failed records always print, even in quiet mode; everything else
    /// honors the output mode.
    pub fn record(&self, record: &CheckRecord) {
        if !self.mode.shows_checks() && record.status != CheckStatus::Failed {
            return;
        }

        match record.kind {
            CheckKind::File => self.file_record(record),
            _ => self.command_record(record),
        }
    }

    fn file_record(&self, record: &CheckRecord) {
        let kind = StatusKind::from(record.status);
        let line = match &record.detail {
            Some(detail) if record.status != CheckStatus::Passed => {
                format!("{}: {} - {}", record.label, record.subject, detail)
            }
            _ => format!("{}: {}", record.label, record.subject),
        };
        println!("{}", self.status_line(kind, &line));
    }

    fn command_record(&self, record: &CheckRecord) {
        let kind = StatusKind::from(record.status);
        let line = match record.status {
            CheckStatus::Passed => match &record.detail {
                Some(detail) => format!(
                    "{}: PASSED {}",
                    record.label,
                    self.theme.dim.apply_to(format!("({})", detail))
                ),
                None => format!("{}: PASSED", record.label),
            },
            CheckStatus::Failed => format!("{}: FAILED", record.label),
            CheckStatus::Warned => format!("{}: FAILED (tolerated)", record.label),
            CheckStatus::Skipped => format!("{}: skipped", record.label),
        };
        println!("{}", self.status_line(kind, &line));

        if record.status == CheckStatus::Failed {
            if let Some(detail) = &record.detail {
                for line in detail.lines() {
                    println!("   {}", self.theme.dim.apply_to(format!("Error: {}", line)));
                }
            }
        }
    }

    /// Print the final success line, regardless of mode.
    pub fn final_success(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    /// Print the final warning line, regardless of mode.
    pub fn final_warning(&self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    /// Create a spinner appropriate for the current mode and terminal.
    pub fn spinner(&self, message: &str) -> ProgressSpinner {
        if self.styled && self.mode.shows_spinners() {
            ProgressSpinner::new(message)
        } else {
            ProgressSpinner::hidden()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckRecord;

    #[test]
    fn reporter_mode_accessor() {
        let reporter = Reporter::plain(OutputMode::Quiet);
        assert_eq!(reporter.mode(), OutputMode::Quiet);
    }

    #[test]
    fn plain_status_line_uses_brackets() {
        let reporter = Reporter::plain(OutputMode::Normal);
        let line = reporter.status_line(StatusKind::Success, "Python Installation: PASSED");
        assert!(line.starts_with("[ok]"));
    }

    #[test]
    fn record_printing_does_not_panic() {
        let reporter = Reporter::plain(OutputMode::Verbose);
        reporter.record(&CheckRecord::passed("A", "a.txt", CheckKind::File));
        reporter.record(
            &CheckRecord::failed("B", "b.txt", CheckKind::File).with_detail("NOT FOUND"),
        );
        reporter.record(
            &CheckRecord::failed("Lint", "flake8 .", CheckKind::Quality)
                .with_detail("line 1\nline 2"),
        );
        reporter.record(
            &CheckRecord::failed("Scan", "bandit -r .", CheckKind::Quality).tolerated(),
        );
        reporter.record(&CheckRecord::skipped("Fmt", "black .", CheckKind::Quality));
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let reporter = Reporter::plain(OutputMode::Quiet);
        let spinner = reporter.spinner("working");
        spinner.finish_and_clear();
    }
}
