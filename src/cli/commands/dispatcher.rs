//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ValidateArgs};
use crate::error::Result;
use crate::ui::Reporter;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, printing through the given reporter.
    fn execute(&self, reporter: &Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// A bare `civet` runs the full validation pipeline with default
    /// arguments.
    pub fn dispatch(&self, cli: &Cli, reporter: &Reporter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(reporter)
            }
            None => {
                let cmd = super::validate::ValidateCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    ValidateArgs::default(),
                );
                cmd.execute(reporter)
            }
            Some(Commands::Files(args)) => {
                let cmd = super::files::FilesCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(reporter)
            }
            Some(Commands::Tools(args)) => {
                let cmd = super::tools::ToolsCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                );
                cmd.execute(reporter)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(&self.project_root, args.clone());
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                super::completions::generate_completions(args.shell);
                Ok(CommandResult::success())
            }
        }
    }
}
