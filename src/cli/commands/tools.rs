//! Tools command implementation.
//!
//! `civet tools` probes the configured development tools alone. Unlike the
//! full pipeline, the exit code here is gated on the probes themselves: the
//! command exists to answer "is my toolchain installed?".

use std::path::{Path, PathBuf};

use crate::checks::tools::probe_tools;
use crate::cli::args::ToolsArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::report::{CheckStatus, ValidationReport};
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The tools command implementation.
pub struct ToolsCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ToolsArgs,
}

impl ToolsCommand {
    /// Create a new tools command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: ToolsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for ToolsCommand {
    fn execute(&self, reporter: &Reporter) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let mut report = ValidationReport::new(config.project_name());

        for record in probe_tools(&config.tools, Some(&self.project_root)) {
            let record = report.push(record);
            if !self.args.json {
                reporter.command_line(&record.subject);
                reporter.record(record);
            }
        }

        // Tolerant probes come back Warned rather than Failed and do not gate.
        let all_present = report
            .records
            .iter()
            .all(|r| r.status != CheckStatus::Failed);

        if self.args.json {
            let value = report.to_json(true);
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        }

        if all_present {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
