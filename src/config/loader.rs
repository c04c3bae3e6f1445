//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CivetError, Result};

use super::defaults::default_config;
use super::schema::CivetConfig;

/// Config file names probed at the project root, in priority order.
const CONFIG_NAMES: [&str; 2] = [".civet.yml", "civet.yml"];

/// Find the project config file, if any.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.exists())
}

/// Load the effective configuration for a project.
///
/// An explicit `--config` path must exist; otherwise the project root is
/// probed and a missing config falls back to the built-in defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<CivetConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CivetError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => find_config(project_root),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            parse_config(&path)?
        }
        None => {
            tracing::debug!("No config file found, using built-in defaults");
            default_config()
        }
    };

    config.validate()?;
    Ok(config)
}

fn parse_config(path: &Path) -> Result<CivetConfig> {
    let contents = fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| CivetError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
