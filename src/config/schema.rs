//! Configuration schema.
//!
//! The schema mirrors the validation pipeline: required files, tool probes,
//! a dependency install command, quality tools, directories to ensure, test
//! commands, and the smoke-test surface.

use serde::{Deserialize, Serialize};

use crate::error::{CivetError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CivetConfig {
    /// Project name shown in the header and the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Required-file checks, in display order.
    #[serde(default)]
    pub files: Vec<FileEntry>,

    /// Tool availability probes.
    #[serde(default)]
    pub tools: Vec<CommandEntry>,

    /// Dependency install command. Quality tools run only after this
    /// succeeds (or when it is absent or skipped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,

    /// Quality tool invocations (formatters, linters, scanners).
    #[serde(default)]
    pub quality: Vec<CommandEntry>,

    /// Directories created unconditionally before tests run.
    #[serde(default)]
    pub ensure_dirs: Vec<String>,

    /// Test-suite invocations.
    #[serde(default)]
    pub tests: Vec<CommandEntry>,

    /// Import smoke-test surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoke: Option<SmokeConfig>,
}

/// A required-file check: path relative to the project root plus its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub label: String,
}

/// A command check: shell command plus its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEntry {
    pub command: String,
    pub label: String,

    /// Tolerant checks report a non-zero exit as a warning and never gate,
    /// even under `--strict`.
    #[serde(default)]
    pub tolerant: bool,
}

/// Import smoke-test configuration.
///
/// Describes the module surface the generated interpreter one-liners assert:
/// the primary module must import and expose every listed attribute, and
/// each extra import must expose its names as callables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Interpreter used to run the generated one-liners.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Primary module to import.
    #[serde(default = "default_module")]
    pub module: String,

    /// Attributes the primary module must expose.
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Additional modules and the callables they must expose.
    #[serde(default)]
    pub imports: Vec<ImportEntry>,
}

/// An extra module import asserted by the smoke test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportEntry {
    pub module: String,
    #[serde(default)]
    pub names: Vec<String>,
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_module() -> String {
    "app".to_string()
}

impl CivetConfig {
    /// Project name with fallback.
    pub fn project_name(&self) -> &str {
        self.project.as_deref().unwrap_or("CI/CD Setup")
    }

    /// Reject structurally invalid configs.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.files {
            if entry.path.trim().is_empty() {
                return Err(CivetError::ConfigValidationError {
                    message: format!("file entry '{}' has an empty path", entry.label),
                });
            }
        }

        let commands = self
            .tools
            .iter()
            .chain(&self.quality)
            .chain(&self.tests);
        for entry in commands {
            if entry.command.trim().is_empty() {
                return Err(CivetError::ConfigValidationError {
                    message: format!("command entry '{}' has an empty command", entry.label),
                });
            }
        }

        if let Some(install) = &self.install {
            if install.trim().is_empty() {
                return Err(CivetError::ConfigValidationError {
                    message: "install command is empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
