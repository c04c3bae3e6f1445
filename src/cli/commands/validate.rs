//! Validate command implementation.
//!
//! `civet validate` (also the default command) runs the full pipeline:
//! file checks, tool probes, dependency install, quality tools, directory
//! creation, smoke tests, test suite, summary. Execution is sequential and
//! fire-and-continue: a failing command never halts the run.
//!
//! The exit code is gated on the file checks alone; `--strict` additionally
//! gates on non-tolerant command checks.

use std::path::{Path, PathBuf};

use crate::checks::{self, files, runner, smoke, tools};
use crate::cli::args::ValidateArgs;
use crate::config::{load_config, CommandEntry};
use crate::error::Result;
use crate::report::{CheckKind, CheckRecord, ValidationReport};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    fn emit(&self, reporter: &Reporter, report: &mut ValidationReport, record: CheckRecord) {
        let record = report.push(record);
        if !self.args.json {
            reporter.record(record);
        }
    }

    fn run_entry(
        &self,
        reporter: &Reporter,
        report: &mut ValidationReport,
        entry: &CommandEntry,
        kind: CheckKind,
    ) {
        if !self.args.json {
            reporter.command_line(&entry.command);
        }
        let mut record = runner::run_command(
            &entry.command,
            &entry.label,
            kind,
            Some(&self.project_root),
        );
        if entry.tolerant {
            record = record.tolerated();
        }
        self.emit(reporter, report, record);
    }
}

impl Command for ValidateCommand {
    fn execute(&self, reporter: &Reporter) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let mut report = ValidationReport::new(config.project_name());
        let human = !self.args.json;

        if human {
            reporter.header(&format!(
                "Validating {} CI/CD setup",
                config.project_name()
            ));
            reporter.message("");
        }

        // Required files
        for record in files::check_files(&self.project_root, &config.files) {
            self.emit(reporter, &mut report, record);
        }

        // Tool availability
        if !config.tools.is_empty() {
            if human {
                reporter.section("Running Code Quality Checks");
            }
            for entry in &config.tools {
                if human {
                    reporter.command_line(&entry.command);
                }
                let record = tools::probe_tool(entry, Some(&self.project_root));
                self.emit(reporter, &mut report, record);
            }
        }

        // Dependency install. Absent or skipped counts as satisfied.
        let install_ok = match &config.install {
            Some(command) if !self.args.skip_install => {
                if human {
                    reporter.section("Installing Development Dependencies");
                    reporter.command_line(command);
                }
                let spinner = if human {
                    reporter.spinner("Installing development dependencies...")
                } else {
                    crate::ui::ProgressSpinner::hidden()
                };
                let record = runner::run_command(
                    command,
                    "Development Dependencies Installation",
                    CheckKind::Install,
                    Some(&self.project_root),
                );
                if record.status.is_pass() {
                    spinner.finish_success("Development dependencies installed");
                } else {
                    spinner.finish_error("Development dependencies installation failed");
                }
                let ok = record.status.is_pass();
                self.emit(reporter, &mut report, record);
                ok
            }
            _ => true,
        };

        // Quality tools, skipped entirely when the install failed
        if !config.quality.is_empty() {
            if human {
                reporter.section("Running Code Quality Tools");
            }
            for entry in &config.quality {
                if install_ok {
                    self.run_entry(reporter, &mut report, entry, CheckKind::Quality);
                } else {
                    self.emit(
                        reporter,
                        &mut report,
                        CheckRecord::skipped(&entry.label, &entry.command, CheckKind::Quality)
                            .with_detail("dependency install failed"),
                    );
                }
            }
        }

        // Directories the test run expects
        checks::ensure_dirs(&self.project_root, &config.ensure_dirs);

        // Smoke tests and test suite
        let mut test_entries: Vec<CommandEntry> = Vec::new();
        if let Some(smoke_config) = &config.smoke {
            test_entries.extend(smoke::smoke_checks(smoke_config));
        }
        test_entries.extend(config.tests.iter().cloned());

        if !test_entries.is_empty() {
            if human {
                reporter.section("Running Tests");
            }
            for entry in &test_entries {
                self.run_entry(reporter, &mut report, entry, CheckKind::Test);
            }
        }

        // Summary
        let summary = report.summary();
        let overall = report.overall(self.args.strict);

        if self.args.json {
            let value = report.to_json(self.args.strict);
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        } else {
            reporter.section("Summary");
            reporter.always(&format!(
                "Configuration Files: {}",
                summary.files_fraction()
            ));

            if summary.files_complete() {
                if overall {
                    reporter.final_success("CI/CD setup is complete and ready!");
                    reporter.message("");
                    reporter.message("Next steps:");
                    reporter.message("  1. Commit and push to trigger the pipeline");
                    reporter.message("  2. Open a pull request to exercise the workflow");
                    reporter.message("  3. Watch the first run in your CI provider");
                } else {
                    reporter.final_warning(&format!(
                        "{} command check(s) failed under --strict",
                        summary.commands_failed
                    ));
                }
            } else {
                reporter.final_warning(
                    "Some configuration files are missing. Please check the setup.",
                );
            }
        }

        if overall {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
