//! Files command implementation.
//!
//! `civet files` runs the required-file checks alone and gates the exit
//! code on them, without touching any tools or tests.

use std::path::{Path, PathBuf};

use crate::checks::files::check_files;
use crate::cli::args::FilesArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::report::ValidationReport;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The files command implementation.
pub struct FilesCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: FilesArgs,
}

impl FilesCommand {
    /// Create a new files command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: FilesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }
}

impl Command for FilesCommand {
    fn execute(&self, reporter: &Reporter) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let mut report = ValidationReport::new(config.project_name());

        for record in check_files(&self.project_root, &config.files) {
            let record = report.push(record);
            if !self.args.json {
                reporter.record(record);
            }
        }

        let summary = report.summary();
        let overall = report.overall(false);

        if self.args.json {
            let value = report.to_json(false);
            println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
        } else {
            reporter.always(&format!(
                "Configuration Files: {}",
                summary.files_fraction()
            ));
        }

        if overall {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
