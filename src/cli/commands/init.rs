//! Init command implementation.
//!
//! `civet init` writes the built-in default configuration to `.civet.yml`
//! so a project can start trimming it down instead of writing from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::defaults::default_config;
use crate::config::find_config;
use crate::error::Result;
use crate::ui::Reporter;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, reporter: &Reporter) -> Result<CommandResult> {
        if let Some(existing) = find_config(&self.project_root) {
            if !self.args.force {
                reporter.error(&format!(
                    "Configuration already exists: {} (use --force to overwrite)",
                    existing.display()
                ));
                return Ok(CommandResult::failure(2));
            }
        }

        let mut config = default_config();
        config.project = self
            .project_root
            .file_name()
            .map(|name| name.to_string_lossy().to_string());

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| crate::error::CivetError::Other(e.into()))?;
        let path = self.project_root.join(".civet.yml");
        fs::write(&path, yaml)?;

        reporter.final_success("Created .civet.yml");
        reporter.message("Edit the file lists to match your project, then run `civet`.");

        Ok(CommandResult::success())
    }
}
